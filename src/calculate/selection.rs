//! Player selection for comparison views.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::PlayerRecord;

/// Most players a comparison view shows at once.
pub const DEFAULT_MAX_COMPARE: usize = 5;

/// Result of a name-based selection.
#[derive(Debug, Clone, Serialize)]
pub struct Selection<'a> {
    /// Matched records, in request order
    pub players: Vec<&'a PlayerRecord>,

    /// Requested names past the cap, ignored
    pub dropped: Vec<String>,
}

/// Look up each requested name (exact match, first row wins).
///
/// Only the first `max_players` names are honoured; the rest are reported
/// in [`Selection::dropped`]. Names with no matching row are skipped.
pub fn select_players<'a, S: AsRef<str>>(
    records: &'a [PlayerRecord],
    names: &[S],
    max_players: usize,
) -> Selection<'a> {
    let honoured = names.len().min(max_players);
    let dropped: Vec<String> = names[honoured..]
        .iter()
        .map(|n| n.as_ref().to_string())
        .collect();

    if !dropped.is_empty() {
        warn!(
            "Selection of {} players exceeds the limit of {}; ignoring {:?}",
            names.len(),
            max_players,
            dropped
        );
    }

    let players = names[..honoured]
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let found = records.iter().find(|r| r.name() == name);
            if found.is_none() {
                debug!("No player named '{}'", name);
            }
            found
        })
        .collect();

    Selection { players, dropped }
}

/// Distinct player names in table order.
pub fn player_names(records: &[PlayerRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.name())
        .filter(|name| seen.insert(*name))
        .collect()
}
