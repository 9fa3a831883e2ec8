use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{rank_and_window, RankedPlayer};
use crate::models::PlayerTable;

#[derive(Debug, Deserialize)]
pub struct RankingParams {
    /// Ranks to skip (0 = start at the best player)
    pub start: Option<usize>,
    /// Window size; defaults to the dashboard top-N
    pub size: Option<usize>,
}

/// Window metadata, mirrors pagination metadata.
#[derive(Debug, Serialize)]
pub struct WindowMeta {
    pub start: usize,
    pub size: usize,
    pub total_rated: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl WindowMeta {
    pub fn new(start: usize, size: usize, total_rated: usize) -> Self {
        Self {
            start,
            size,
            total_rated,
            has_next: start.saturating_add(size) < total_rated,
            has_prev: start > 0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankingResponse<'a> {
    pub window: WindowMeta,
    /// Ascending by rating: the best player of the window comes last
    pub players: Vec<RankedPlayer<'a>>,
}

impl<'a> RankingResponse<'a> {
    pub fn build(table: &'a PlayerTable, start: usize, size: usize) -> Self {
        Self {
            window: WindowMeta::new(start, size, table.rated().count()),
            players: rank_and_window(table.records(), start, size),
        }
    }
}

pub async fn ranking(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> Result<Response, ApiError> {
    let start = params.start.unwrap_or(0);
    let size = params.size.unwrap_or(state.dashboard.top_n);

    Ok(Json(RankingResponse::build(&state.table, start, size)).into_response())
}

#[cfg(test)]
mod tests {
    use super::RankingResponse;
    use crate::api::build_router;
    use crate::api::test_support::{empty_state, get_json, setup_test_state};
    use axum::http::StatusCode;

    #[test]
    fn test_build_window_serializes() {
        let state = setup_test_state();
        let json = serde_json::to_value(RankingResponse::build(&state.table, 10, 5)).unwrap();

        assert_eq!(json["window"]["total_rated"], 13);
        assert_eq!(json["window"]["has_next"], false);
        assert_eq!(json["window"]["has_prev"], true);
        let players = json["players"].as_array().unwrap();
        assert_eq!(players.len(), 3);
        assert_eq!(players[0]["rank"], 13);
        assert_eq!(players[2]["rank"], 11);
    }

    #[tokio::test]
    async fn test_default_window_is_top_ten() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/ranking").await;

        assert_eq!(status, StatusCode::OK);
        let players = json["players"].as_array().unwrap();
        assert_eq!(players.len(), 10);
        assert_eq!(players[9]["name"], "A");
        assert_eq!(players[9]["rank"], 1);
        assert_eq!(players[0]["rank"], 10);
        assert_eq!(json["window"]["total_rated"], 13);
        assert_eq!(json["window"]["has_next"], true);
        assert_eq!(json["window"]["has_prev"], false);
    }

    #[tokio::test]
    async fn test_second_window_is_partial() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/ranking?start=10&size=10").await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = json["players"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["P01", "P02", "P03"]);
        assert_eq!(json["window"]["has_next"], false);
    }

    #[tokio::test]
    async fn test_window_past_end_is_empty() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/ranking?start=500").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["players"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_benched_player_not_ranked() {
        let app = build_router(setup_test_state());
        let (_, json) = get_json(app, "/api/ranking?size=100").await;

        let players = json["players"].as_array().unwrap();
        assert_eq!(players.len(), 13);
        assert!(players.iter().all(|p| p["name"] != "Benched"));
    }

    #[tokio::test]
    async fn test_ranking_empty_table() {
        let app = build_router(empty_state());
        let (status, json) = get_json(app, "/api/ranking").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["window"]["total_rated"], 0);
        assert!(json["players"].as_array().unwrap().is_empty());
    }
}
