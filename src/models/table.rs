//! Immutable enriched player table.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::PlayerRecord;

/// Snapshot metadata, served alongside the records.
#[derive(Debug, Clone, Serialize)]
pub struct TableMeta {
    /// Spreadsheet the table was loaded from
    pub source: Option<PathBuf>,

    /// When the table was loaded and enriched
    pub loaded_at: DateTime<Utc>,

    /// Total rows
    pub players: usize,

    /// Rows with a finite rating
    pub rated_players: usize,
}

/// The enriched table, built once per process and shared read-only.
#[derive(Debug, Clone)]
pub struct PlayerTable {
    records: Vec<PlayerRecord>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl PlayerTable {
    /// Create a table from already enriched records.
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self {
            records,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Record the spreadsheet this table came from.
    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }

    /// All rows, in input order.
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First row whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Rows with a finite rating, in input order.
    pub fn rated(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter().filter(|r| r.is_rated())
    }

    pub fn meta(&self) -> TableMeta {
        TableMeta {
            source: self.source.clone(),
            loaded_at: self.loaded_at,
            players: self.records.len(),
            rated_players: self.rated().count(),
        }
    }
}
