//! Spreadsheet ingestion.
//!
//! Reads a single-sheet CSV export with one header row. Columns are matched
//! by name (canonical snake_case key or the original sheet header), so
//! their order does not matter and extra columns are ignored.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::calculate;
use crate::models::{PlayerTable, RawPlayerStats, StatField};

/// Header of the name column.
pub const NAME_COLUMN: &str = "name";

/// Original sheet header of the name column.
pub const NAME_ALIAS: &str = "Nombre";

/// Errors that can occur while loading a spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required field: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid value '{value}' for {column} on line {line}")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Header positions resolved once per file.
struct ColumnMap {
    name: usize,
    fields: HashMap<StatField, usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, IngestError> {
        let position = |key: &str, alias: &str| {
            headers
                .iter()
                .position(|h| h == key)
                .or_else(|| headers.iter().position(|h| h == alias))
        };

        let name = position(NAME_COLUMN, NAME_ALIAS).ok_or(IngestError::MissingColumn(NAME_COLUMN))?;

        let mut fields = HashMap::new();
        for field in StatField::ALL.iter().filter(|f| !f.is_derived()) {
            match position(field.key(), field.alias()) {
                Some(idx) => {
                    fields.insert(*field, idx);
                }
                None if field.is_required() => {
                    return Err(IngestError::MissingColumn(field.key()));
                }
                None => {}
            }
        }

        Ok(Self { name, fields })
    }

    fn cell<'r>(&self, record: &'r csv::StringRecord, field: StatField) -> Option<&'r str> {
        self.fields.get(&field).and_then(|&idx| record.get(idx))
    }
}

/// Parse a numeric cell. Blank reads as `NaN`; `inf`/`NaN` text is rejected.
fn parse_number(raw: &str, line: u64, column: &'static str) -> Result<f64, IngestError> {
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| IngestError::InvalidValue {
            line,
            column,
            value: raw.to_string(),
        })
}

fn parse_row(columns: &ColumnMap, record: &csv::StringRecord) -> Result<RawPlayerStats, IngestError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let num = |field: StatField| -> Result<f64, IngestError> {
        parse_number(columns.cell(record, field).unwrap_or(""), line, field.key())
    };

    let fg_pct = match columns.cell(record, StatField::FgPct) {
        Some(raw) if !raw.is_empty() => Some(parse_number(raw, line, StatField::FgPct.key())?),
        _ => None,
    };

    Ok(RawPlayerStats {
        name: record.get(columns.name).unwrap_or_default().to_string(),
        minutes_played: num(StatField::MinutesPlayed)?,
        points_total: num(StatField::PointsTotal)?,
        offensive_rebounds: num(StatField::OffensiveRebounds)?,
        defensive_rebounds: num(StatField::DefensiveRebounds)?,
        assists: num(StatField::Assists)?,
        steals: num(StatField::Steals)?,
        blocks_committed: num(StatField::BlocksCommitted)?,
        blocks_received: num(StatField::BlocksReceived)?,
        turnovers: num(StatField::Turnovers)?,
        personal_fouls_committed: num(StatField::PersonalFoulsCommitted)?,
        personal_fouls_drawn: num(StatField::PersonalFoulsDrawn)?,
        games_played: num(StatField::GamesPlayed)?,
        fg1_pct: num(StatField::Fg1Pct)?,
        fg2_pct: num(StatField::Fg2Pct)?,
        fg3_pct: num(StatField::Fg3Pct)?,
        fg_pct,
    })
}

/// Read raw stat lines from any CSV source.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<RawPlayerStats>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut players = Vec::new();
    for result in reader.records() {
        let record = result?;
        players.push(parse_row(&columns, &record)?);
    }
    Ok(players)
}

/// Read raw stat lines from a CSV file.
pub fn load_players(path: &Path) -> Result<Vec<RawPlayerStats>, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_players_from_reader(file)
}

/// Load and enrich a spreadsheet into an immutable table.
pub fn load_table(path: &Path) -> Result<PlayerTable, IngestError> {
    let raw = load_players(path)?;
    let table = PlayerTable::new(calculate::enrich(raw)).with_source(path.to_path_buf());

    let meta = table.meta();
    info!(
        "Loaded {} players ({} rated) from {:?}",
        meta.players, meta.rated_players, path
    );
    Ok(table)
}
