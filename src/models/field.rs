//! Named numeric columns of the enriched table.

use serde::{Deserialize, Serialize};

use super::PlayerRecord;

/// A numeric column, raw or derived, addressable by key.
///
/// Used for averages and scatter axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    MinutesPlayed,
    PointsTotal,
    OffensiveRebounds,
    DefensiveRebounds,
    Assists,
    Steals,
    BlocksCommitted,
    BlocksReceived,
    Turnovers,
    PersonalFoulsCommitted,
    PersonalFoulsDrawn,
    GamesPlayed,
    Fg1Pct,
    Fg2Pct,
    Fg3Pct,
    FgPct,
    OffenseScore,
    DefenseScore,
    ApproxRating,
}

impl StatField {
    /// Every field, in spreadsheet order followed by the derived ones.
    pub const ALL: [StatField; 19] = [
        StatField::MinutesPlayed,
        StatField::PointsTotal,
        StatField::OffensiveRebounds,
        StatField::DefensiveRebounds,
        StatField::Assists,
        StatField::Steals,
        StatField::BlocksCommitted,
        StatField::BlocksReceived,
        StatField::Turnovers,
        StatField::PersonalFoulsCommitted,
        StatField::PersonalFoulsDrawn,
        StatField::GamesPlayed,
        StatField::Fg1Pct,
        StatField::Fg2Pct,
        StatField::Fg3Pct,
        StatField::FgPct,
        StatField::OffenseScore,
        StatField::DefenseScore,
        StatField::ApproxRating,
    ];

    /// Canonical column key.
    pub fn key(&self) -> &'static str {
        match self {
            StatField::MinutesPlayed => "minutes_played",
            StatField::PointsTotal => "points_total",
            StatField::OffensiveRebounds => "offensive_rebounds",
            StatField::DefensiveRebounds => "defensive_rebounds",
            StatField::Assists => "assists",
            StatField::Steals => "steals",
            StatField::BlocksCommitted => "blocks_committed",
            StatField::BlocksReceived => "blocks_received",
            StatField::Turnovers => "turnovers",
            StatField::PersonalFoulsCommitted => "personal_fouls_committed",
            StatField::PersonalFoulsDrawn => "personal_fouls_drawn",
            StatField::GamesPlayed => "games_played",
            StatField::Fg1Pct => "fg1_pct",
            StatField::Fg2Pct => "fg2_pct",
            StatField::Fg3Pct => "fg3_pct",
            StatField::FgPct => "fg_pct",
            StatField::OffenseScore => "offense_score",
            StatField::DefenseScore => "defense_score",
            StatField::ApproxRating => "approx_rating",
        }
    }

    /// Header used by the original Spanish-language sheets.
    pub fn alias(&self) -> &'static str {
        match self {
            StatField::MinutesPlayed => "Minutos Jugados",
            StatField::PointsTotal => "Puntos Totales",
            StatField::OffensiveRebounds => "Rebotes Ofensivos",
            StatField::DefensiveRebounds => "Rebotes Defensivos",
            StatField::Assists => "Asistencias",
            StatField::Steals => "Recuperaciones",
            StatField::BlocksCommitted => "Tapones Cometidos",
            StatField::BlocksReceived => "Tapones Recibidos",
            StatField::Turnovers => "Pérdidas",
            StatField::PersonalFoulsCommitted => "Faltas Personales Cometidas",
            StatField::PersonalFoulsDrawn => "Faltas Personales Recibidas",
            StatField::GamesPlayed => "Partidos Jugados",
            StatField::Fg1Pct => "TCP1 (%)",
            StatField::Fg2Pct => "TCP2 (%)",
            StatField::Fg3Pct => "TCP3 (%)",
            StatField::FgPct => "TC (%)",
            StatField::OffenseScore => "Ataque",
            StatField::DefenseScore => "Defensa",
            StatField::ApproxRating => "PER Aproximado",
        }
    }

    /// Human-readable label for chart axes and cards.
    pub fn label(&self) -> &'static str {
        match self {
            StatField::MinutesPlayed => "Minutes played",
            StatField::PointsTotal => "Total points",
            StatField::OffensiveRebounds => "Offensive rebounds",
            StatField::DefensiveRebounds => "Defensive rebounds",
            StatField::Assists => "Assists",
            StatField::Steals => "Steals",
            StatField::BlocksCommitted => "Blocks",
            StatField::BlocksReceived => "Blocks received",
            StatField::Turnovers => "Turnovers",
            StatField::PersonalFoulsCommitted => "Fouls committed",
            StatField::PersonalFoulsDrawn => "Fouls drawn",
            StatField::GamesPlayed => "Games played",
            StatField::Fg1Pct => "Free throws (%)",
            StatField::Fg2Pct => "Two-point (%)",
            StatField::Fg3Pct => "Three-point (%)",
            StatField::FgPct => "Field goals (%)",
            StatField::OffenseScore => "Offense",
            StatField::DefenseScore => "Defense",
            StatField::ApproxRating => "Approx. rating",
        }
    }

    /// Whether the column is computed rather than read from the sheet.
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            StatField::OffenseScore | StatField::DefenseScore | StatField::ApproxRating
        )
    }

    /// Whether a sheet must carry this column.
    pub fn is_required(&self) -> bool {
        !self.is_derived() && *self != StatField::FgPct
    }

    /// Parse from a canonical key or a sheet alias (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(s) || f.alias().eq_ignore_ascii_case(s))
    }

    /// Read this field from a record. Missing values read as `NaN`.
    pub fn value(&self, record: &PlayerRecord) -> f64 {
        let s = &record.stats;
        let m = &record.metrics;
        match self {
            StatField::MinutesPlayed => s.minutes_played,
            StatField::PointsTotal => s.points_total,
            StatField::OffensiveRebounds => s.offensive_rebounds,
            StatField::DefensiveRebounds => s.defensive_rebounds,
            StatField::Assists => s.assists,
            StatField::Steals => s.steals,
            StatField::BlocksCommitted => s.blocks_committed,
            StatField::BlocksReceived => s.blocks_received,
            StatField::Turnovers => s.turnovers,
            StatField::PersonalFoulsCommitted => s.personal_fouls_committed,
            StatField::PersonalFoulsDrawn => s.personal_fouls_drawn,
            StatField::GamesPlayed => s.games_played,
            StatField::Fg1Pct => s.fg1_pct,
            StatField::Fg2Pct => s.fg2_pct,
            StatField::Fg3Pct => s.fg3_pct,
            StatField::FgPct => s.fg_pct.unwrap_or(f64::NAN),
            StatField::OffenseScore => m.offense_score,
            StatField::DefenseScore => m.defense_score,
            StatField::ApproxRating => m.approx_rating,
        }
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for StatField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown field: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DerivedMetrics, RawPlayerStats};

    #[test]
    fn test_parse_key_and_alias() {
        assert_eq!(StatField::parse("points_total"), Some(StatField::PointsTotal));
        assert_eq!(StatField::parse("Puntos Totales"), Some(StatField::PointsTotal));
        assert_eq!(StatField::parse(" TCP3 (%) "), Some(StatField::Fg3Pct));
        assert_eq!(StatField::parse("APPROX_RATING"), Some(StatField::ApproxRating));
        assert_eq!(StatField::parse("height"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "height".parse::<StatField>().unwrap_err();
        assert_eq!(err, "unknown field: height");
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = StatField::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), StatField::ALL.len());
    }

    #[test]
    fn test_required_columns() {
        let required: Vec<_> = StatField::ALL.iter().filter(|f| f.is_required()).collect();
        assert_eq!(required.len(), 15);
        assert!(!StatField::FgPct.is_required());
        assert!(!StatField::ApproxRating.is_required());
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&StatField::PersonalFoulsDrawn).unwrap();
        assert_eq!(json, "\"personal_fouls_drawn\"");
        assert_eq!(StatField::Fg1Pct.to_string(), "fg1_pct");
    }

    #[test]
    fn test_value_reads_record() {
        let mut stats = RawPlayerStats::new("A");
        stats.assists = 7.0;
        let record = PlayerRecord {
            stats,
            metrics: DerivedMetrics {
                offense_score: 0.25,
                defense_score: 0.75,
                approx_rating: 30.0,
            },
        };

        assert_eq!(StatField::Assists.value(&record), 7.0);
        assert_eq!(StatField::DefenseScore.value(&record), 0.75);
        assert!(StatField::FgPct.value(&record).is_nan());
    }
}
