//! Data series for scatter and radar charts.

use serde::Serialize;

use crate::models::{PlayerRecord, StatField};

/// One point of an attribute scatter plot, coloured by rating.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint<'a> {
    pub name: &'a str,
    pub x: f64,
    pub y: f64,
    pub approx_rating: f64,
}

/// Scatter series for two fields.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries<'a> {
    pub x: StatField,
    pub y: StatField,
    pub title: String,
    pub points: Vec<ScatterPoint<'a>>,
}

/// Pair `x` and `y` for every row where both are finite.
pub fn scatter(records: &[PlayerRecord], x: StatField, y: StatField) -> ScatterSeries<'_> {
    let points = records
        .iter()
        .filter_map(|r| {
            let (xv, yv) = (x.value(r), y.value(r));
            (xv.is_finite() && yv.is_finite()).then(|| ScatterPoint {
                name: r.name(),
                x: xv,
                y: yv,
                approx_rating: r.approx_rating(),
            })
        })
        .collect();

    ScatterSeries {
        x,
        y,
        title: format!("{} vs {}", x.label(), y.label()),
        points,
    }
}

/// Radar axes, in display order.
pub const RADAR_AXES: [StatField; 5] = [
    StatField::Fg2Pct,
    StatField::Fg3Pct,
    StatField::Fg1Pct,
    StatField::OffenseScore,
    StatField::DefenseScore,
];

#[derive(Debug, Clone, Serialize)]
pub struct RadarAxis {
    pub field: StatField,
    pub label: &'static str,
    pub value: f64,
}

/// A player's shooting and participation profile.
#[derive(Debug, Clone, Serialize)]
pub struct RadarProfile<'a> {
    pub name: &'a str,
    pub axes: Vec<RadarAxis>,
}

pub fn radar_profile(record: &PlayerRecord) -> RadarProfile<'_> {
    RadarProfile {
        name: record.name(),
        axes: RADAR_AXES
            .iter()
            .map(|&field| RadarAxis {
                field,
                label: field.label(),
                value: field.value(record),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::fixtures::{player_a, shooter, table};

    #[test]
    fn test_scatter_pairs_fields() {
        let table = table(vec![player_a(), shooter("B", 20.0)]);
        let series = scatter(table.records(), StatField::MinutesPlayed, StatField::PointsTotal);

        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].name, "A");
        assert_eq!(series.points[0].x, 30.0);
        assert_eq!(series.points[0].y, 20.0);
        assert_eq!(series.title, "Minutes played vs Total points");
    }

    #[test]
    fn test_scatter_skips_missing_values() {
        let table = table(vec![player_a(), shooter("B", 20.0)]);
        let series = scatter(table.records(), StatField::FgPct, StatField::Assists);

        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].name, "A");
    }

    #[test]
    fn test_radar_has_all_five_axes() {
        let table = table(vec![player_a()]);
        let profile = radar_profile(&table.records()[0]);

        let fields: Vec<_> = profile.axes.iter().map(|a| a.field).collect();
        assert_eq!(fields, RADAR_AXES.to_vec());
        assert_eq!(profile.axes[0].value, 50.0);
        assert_eq!(profile.axes[2].label, "Free throws (%)");
        assert!((profile.axes[3].value - 23.0 / 30.0).abs() < 1e-9);
    }
}
