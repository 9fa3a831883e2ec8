use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{self, RadarProfile};
use crate::models::{PlayerRecord, TableMeta};

#[derive(Debug, Serialize)]
pub struct PlayersResponse<'a> {
    pub meta: TableMeta,
    pub players: &'a [PlayerRecord],
}

/// The full enriched table, in input order.
pub async fn list_players(State(state): State<AppState>) -> Result<Response, ApiError> {
    let resp = PlayersResponse {
        meta: state.table.meta(),
        players: state.table.records(),
    };
    Ok(Json(resp).into_response())
}

#[derive(Debug, Serialize)]
pub struct NamesResponse<'a> {
    pub names: Vec<&'a str>,
}

/// Distinct player names, for comparison pickers.
pub async fn player_names(State(state): State<AppState>) -> Result<Response, ApiError> {
    let names = calculate::player_names(state.table.records());
    Ok(Json(NamesResponse { names }).into_response())
}

pub async fn player_radar(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let record = state
        .table
        .find(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Player '{}'", name)))?;

    Ok(Json(calculate::radar_profile(record)).into_response())
}

#[derive(Debug, Serialize)]
pub struct CompareResponse<'a> {
    pub players: Vec<&'a PlayerRecord>,
    pub radar: Vec<RadarProfile<'a>>,
    pub dropped: Vec<String>,
    pub notice: Option<String>,
}

/// Requested names in query order. `names` is comma-separated; each `name`
/// is taken verbatim, for names that contain a comma.
fn requested_names(params: &[(String, String)]) -> Vec<&str> {
    params
        .iter()
        .flat_map(|(key, value)| match key.as_str() {
            "names" => value.split(',').collect(),
            "name" => vec![value.as_str()],
            _ => Vec::new(),
        })
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect()
}

/// Side-by-side comparison of up to `max_compare` players.
pub async fn compare(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let names = requested_names(&params);

    let max = state.dashboard.max_compare;
    let selection = calculate::select_players(state.table.records(), &names, max);

    let notice = (!selection.dropped.is_empty()).then(|| {
        format!(
            "Only the first {} players are compared; {} ignored",
            max,
            selection.dropped.len()
        )
    });

    let resp = CompareResponse {
        radar: selection
            .players
            .iter()
            .map(|&r| calculate::radar_profile(r))
            .collect(),
        players: selection.players,
        dropped: selection.dropped,
        notice,
    };
    Ok(Json(resp).into_response())
}
