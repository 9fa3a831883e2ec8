//! Player record models.

use serde::{Deserialize, Serialize};

/// Raw box-score line for one player-season, as read from the spreadsheet.
///
/// Blank cells are carried as `NaN` so that a missing value poisons the
/// derived metrics instead of silently reading as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlayerStats {
    /// Player name (lookup key)
    pub name: String,

    /// Minutes played; divisor for the per-minute scores
    pub minutes_played: f64,

    pub points_total: f64,
    pub offensive_rebounds: f64,
    pub defensive_rebounds: f64,
    pub assists: f64,

    /// Recoveries
    pub steals: f64,

    pub blocks_committed: f64,
    pub blocks_received: f64,

    /// Losses
    pub turnovers: f64,

    pub personal_fouls_committed: f64,
    pub personal_fouls_drawn: f64,
    pub games_played: f64,

    /// Free-throw percentage (0-100)
    pub fg1_pct: f64,

    /// Two-point percentage (0-100)
    pub fg2_pct: f64,

    /// Three-point percentage (0-100)
    pub fg3_pct: f64,

    /// Overall field-goal percentage (0-100), when the sheet carries it
    pub fg_pct: Option<f64>,
}

impl RawPlayerStats {
    /// Create a stat line with every numeric field zeroed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minutes_played: 0.0,
            points_total: 0.0,
            offensive_rebounds: 0.0,
            defensive_rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks_committed: 0.0,
            blocks_received: 0.0,
            turnovers: 0.0,
            personal_fouls_committed: 0.0,
            personal_fouls_drawn: 0.0,
            games_played: 0.0,
            fg1_pct: 0.0,
            fg2_pct: 0.0,
            fg3_pct: 0.0,
            fg_pct: None,
        }
    }
}

/// Composite metrics derived from a single stat line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Per-minute offensive participation, clamped to [0, 1]
    pub offense_score: f64,

    /// Per-minute defensive participation, clamped to [0, 1]
    pub defense_score: f64,

    /// Unweighted mean of the three shooting percentages and both scores
    pub approx_rating: f64,
}

/// An enriched table row: raw stats plus derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(flatten)]
    pub stats: RawPlayerStats,

    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

impl PlayerRecord {
    pub fn name(&self) -> &str {
        &self.stats.name
    }

    pub fn approx_rating(&self) -> f64 {
        self.metrics.approx_rating
    }

    /// Whether this row takes part in rankings (finite rating).
    pub fn is_rated(&self) -> bool {
        self.metrics.approx_rating.is_finite()
    }
}
