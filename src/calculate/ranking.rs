//! Rating-based ranking and top-N windows.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::PlayerRecord;

/// A record with its 1-based position in the descending ranking.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedPlayer<'a> {
    pub rank: usize,

    #[serde(flatten)]
    pub record: &'a PlayerRecord,
}

fn by_rating(a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
    a.approx_rating().total_cmp(&b.approx_rating())
}

/// Full ranking, best rating first.
///
/// Unrated rows are left out. The sort is stable, so tied ratings keep
/// their input order.
pub fn ranking(records: &[PlayerRecord]) -> Vec<RankedPlayer<'_>> {
    let mut rated: Vec<&PlayerRecord> = records.iter().filter(|r| r.is_rated()).collect();
    rated.sort_by(|a, b| by_rating(b, a));

    rated
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedPlayer { rank: i + 1, record })
        .collect()
}

/// Slice `window_size` ranks starting after `window_start` ranks, then
/// order the slice by ascending rating so a horizontal bar chart puts the
/// best player on top.
///
/// Windows past the end come back short or empty.
pub fn rank_and_window(
    records: &[PlayerRecord],
    window_start: usize,
    window_size: usize,
) -> Vec<RankedPlayer<'_>> {
    let mut window: Vec<_> = ranking(records)
        .into_iter()
        .skip(window_start)
        .take(window_size)
        .collect();
    window.sort_by(|a, b| by_rating(a.record, b.record));
    window
}

/// The first `n` ranks, ascending by rating.
pub fn top_n(records: &[PlayerRecord], n: usize) -> Vec<RankedPlayer<'_>> {
    rank_and_window(records, 0, n)
}
