//! Averages and dashboard summary cards.

use serde::Serialize;

use super::CalculateError;
use crate::models::{PlayerRecord, StatField};

/// Arithmetic mean of `field` over rated rows where it is finite.
///
/// Unrated rows (zero or missing minutes) are skipped for every field, raw
/// columns included, as are rows with a missing or non-finite value. If
/// nothing is left to average the result is [`CalculateError::NoData`].
pub fn average(records: &[PlayerRecord], field: StatField) -> Result<f64, CalculateError> {
    let (sum, count) = records
        .iter()
        .filter(|r| r.is_rated())
        .map(|r| field.value(r))
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return Err(CalculateError::NoData { field });
    }
    Ok(sum / count as f64)
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub players: usize,
    pub rated_players: usize,
    pub avg_offense_score: Option<f64>,
    pub avg_defense_score: Option<f64>,
    pub avg_approx_rating: Option<f64>,
    pub avg_fg_pct: Option<f64>,
}

pub fn dashboard_summary(records: &[PlayerRecord]) -> DashboardSummary {
    DashboardSummary {
        players: records.len(),
        rated_players: records.iter().filter(|r| r.is_rated()).count(),
        avg_offense_score: average(records, StatField::OffenseScore).ok(),
        avg_defense_score: average(records, StatField::DefenseScore).ok(),
        avg_approx_rating: average(records, StatField::ApproxRating).ok(),
        avg_fg_pct: average(records, StatField::FgPct).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{player_a, shooter, table};
    use crate::models::RawPlayerStats;

    #[test]
    fn test_average_raw_field() {
        let table = table(vec![shooter("A", 10.0), shooter("B", 20.0), shooter("C", 60.0)]);
        let avg = average(table.records(), StatField::Fg2Pct).unwrap();
        assert!((avg - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_derived_field() {
        let table = table(vec![shooter("A", 10.0), shooter("B", 20.0)]);
        let avg = average(table.records(), StatField::OffenseScore).unwrap();
        assert!((avg - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_average_empty_table_is_no_data() {
        let table = table(Vec::new());
        assert_eq!(
            average(table.records(), StatField::ApproxRating),
            Err(CalculateError::NoData {
                field: StatField::ApproxRating
            })
        );
    }

    #[test]
    fn test_average_skips_unrated_rows() {
        let mut benched = shooter("Benched", 90.0);
        benched.minutes_played = 0.0;
        let table = table(vec![shooter("A", 10.0), benched]);

        let avg = average(table.records(), StatField::DefenseScore).unwrap();
        assert_eq!(avg, 0.0);

        let rating = average(table.records(), StatField::ApproxRating).unwrap();
        assert!((rating - table.records()[0].approx_rating()).abs() < 1e-9);

        let fg1 = average(table.records(), StatField::Fg1Pct).unwrap();
        assert!((fg1 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_raw_columns_ignore_zero_minute_row() {
        let mut starter = RawPlayerStats::new("Starter");
        starter.minutes_played = 30.0;
        starter.fg1_pct = 80.0;
        let table = table(vec![starter, RawPlayerStats::new("Bench")]);

        assert_eq!(average(table.records(), StatField::Fg1Pct), Ok(80.0));
        assert_eq!(average(table.records(), StatField::MinutesPlayed), Ok(30.0));
    }

    #[test]
    fn test_average_only_unrated_rows_is_no_data() {
        let table = table(vec![RawPlayerStats::new("Bench")]);
        assert_eq!(
            average(table.records(), StatField::GamesPlayed),
            Err(CalculateError::NoData {
                field: StatField::GamesPlayed
            })
        );
    }

    #[test]
    fn test_average_all_missing_is_no_data() {
        let table = table(vec![shooter("A", 10.0)]);
        assert!(matches!(
            average(table.records(), StatField::FgPct),
            Err(CalculateError::NoData { .. })
        ));
    }

    #[test]
    fn test_dashboard_summary() {
        let mut benched = shooter("Benched", 0.0);
        benched.minutes_played = 0.0;
        let table = table(vec![player_a(), shooter("B", 20.0), benched]);
        let summary = dashboard_summary(table.records());

        assert_eq!(summary.players, 3);
        assert_eq!(summary.rated_players, 2);
        assert_eq!(summary.avg_fg_pct, Some(47.0));
        assert!(summary.avg_approx_rating.is_some());
    }

    #[test]
    fn test_dashboard_summary_empty() {
        let summary = dashboard_summary(&[]);
        assert_eq!(summary.players, 0);
        assert!(summary.avg_offense_score.is_none());
        assert!(summary.avg_fg_pct.is_none());
    }
}
