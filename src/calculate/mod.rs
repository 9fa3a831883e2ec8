//! Metric derivation and read-only views.
//!
//! Computes derived metrics from the loaded player table:
//! - Offense and defense participation scores
//! - Approximate performance rating
//! - Ranking windows, player selections, averages and chart series

mod charts;
mod ranking;
mod selection;
mod summary;

pub use charts::*;
pub use ranking::*;
pub use selection::*;
pub use summary::*;

use thiserror::Error;
use tracing::warn;

use crate::models::{DerivedMetrics, PlayerRecord, RawPlayerStats, StatField};

/// Calculation errors.
#[derive(Debug, Error, PartialEq)]
pub enum CalculateError {
    #[error("No data to average for field '{field}'")]
    NoData { field: StatField },
}

/// Clamp to [0, 1]. `NaN` stays `NaN`.
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Divide a total by minutes played.
///
/// Zero, negative-zero or non-finite minutes yield `NaN`; an infinite
/// quotient would otherwise clamp to a perfect score.
pub fn per_minute(total: f64, minutes_played: f64) -> f64 {
    if minutes_played == 0.0 || !minutes_played.is_finite() {
        f64::NAN
    } else {
        total / minutes_played
    }
}

/// Offensive participation per minute, clamped to [0, 1].
pub fn offense_score(stats: &RawPlayerStats) -> f64 {
    let total = stats.points_total + stats.offensive_rebounds + stats.assists
        - stats.blocks_received
        - stats.turnovers;
    clamp01(per_minute(total, stats.minutes_played))
}

/// Defensive participation per minute, clamped to [0, 1].
pub fn defense_score(stats: &RawPlayerStats) -> f64 {
    let total = stats.steals
        + stats.defensive_rebounds
        + stats.blocks_committed
        + stats.personal_fouls_drawn
        - stats.personal_fouls_committed;
    clamp01(per_minute(total, stats.minutes_played))
}

/// Approximate rating: plain mean of the three shooting percentages
/// (0-100 scale) and the two scores (0-1 scale).
pub fn approx_rating(stats: &RawPlayerStats, offense: f64, defense: f64) -> f64 {
    (stats.fg1_pct + stats.fg2_pct + stats.fg3_pct + offense + defense) / 5.0
}

/// Derive all metrics for one stat line.
pub fn derive_metrics(stats: &RawPlayerStats) -> DerivedMetrics {
    let offense = offense_score(stats);
    let defense = defense_score(stats);
    DerivedMetrics {
        offense_score: offense,
        defense_score: defense,
        approx_rating: approx_rating(stats, offense, defense),
    }
}

/// Enrich raw rows with derived metrics. Order is preserved.
pub fn enrich(rows: Vec<RawPlayerStats>) -> Vec<PlayerRecord> {
    rows.into_iter()
        .map(|stats| {
            let metrics = derive_metrics(&stats);
            if !metrics.approx_rating.is_finite() {
                warn!(
                    "Player '{}' has no usable rating (minutes played: {}); excluded from rankings",
                    stats.name, stats.minutes_played
                );
            }
            PlayerRecord { stats, metrics }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{PlayerRecord, PlayerTable, RawPlayerStats};

    /// Player A from the reference fixture.
    pub fn player_a() -> RawPlayerStats {
        RawPlayerStats {
            name: "A".to_string(),
            minutes_played: 30.0,
            points_total: 20.0,
            offensive_rebounds: 2.0,
            defensive_rebounds: 4.0,
            assists: 5.0,
            steals: 2.0,
            blocks_committed: 1.0,
            blocks_received: 1.0,
            turnovers: 3.0,
            personal_fouls_committed: 3.0,
            personal_fouls_drawn: 2.0,
            games_played: 10.0,
            fg1_pct: 80.0,
            fg2_pct: 50.0,
            fg3_pct: 40.0,
            fg_pct: Some(47.0),
        }
    }

    /// A row whose rating is driven by its shooting percentages.
    pub fn shooter(name: &str, pct: f64) -> RawPlayerStats {
        let mut stats = RawPlayerStats::new(name);
        stats.minutes_played = 100.0;
        stats.points_total = 10.0;
        stats.fg1_pct = pct;
        stats.fg2_pct = pct;
        stats.fg3_pct = pct;
        stats
    }

    pub fn table(rows: Vec<RawPlayerStats>) -> PlayerTable {
        PlayerTable::new(super::enrich(rows))
    }

    pub fn names<'a>(records: impl IntoIterator<Item = &'a PlayerRecord>) -> Vec<&'a str> {
        records.into_iter().map(|r| r.name()).collect()
    }
}
