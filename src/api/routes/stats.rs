use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{self, CalculateError};
use crate::models::{PlayerRecord, StatField};

fn parse_field(key: &str) -> Result<StatField, ApiError> {
    StatField::parse(key).ok_or_else(|| ApiError::BadRequest(format!("Unknown field: {}", key)))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub players: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        players: state.table.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub derived: bool,
}

#[derive(Debug, Serialize)]
pub struct FieldsResponse {
    pub fields: Vec<FieldInfo>,
}

impl FieldsResponse {
    /// Every numeric field usable as a scatter axis or average.
    pub fn catalogue() -> Self {
        let fields = StatField::ALL
            .iter()
            .map(|f| FieldInfo {
                key: f.key(),
                label: f.label(),
                derived: f.is_derived(),
            })
            .collect();
        Self { fields }
    }
}

pub async fn fields() -> Json<FieldsResponse> {
    Json(FieldsResponse::catalogue())
}

pub async fn summary(State(state): State<AppState>) -> Json<calculate::DashboardSummary> {
    Json(calculate::dashboard_summary(state.table.records()))
}

#[derive(Debug, Deserialize)]
pub struct AverageParams {
    pub field: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AverageResponse {
    pub field: StatField,
    pub label: &'static str,
    pub average: f64,
}

impl AverageResponse {
    pub fn compute(records: &[PlayerRecord], field: StatField) -> Result<Self, CalculateError> {
        let average = calculate::average(records, field)?;
        Ok(Self {
            field,
            label: field.label(),
            average,
        })
    }
}

pub async fn average(
    State(state): State<AppState>,
    Query(params): Query<AverageParams>,
) -> Result<Json<AverageResponse>, ApiError> {
    let key = params
        .field
        .ok_or_else(|| ApiError::BadRequest("Missing 'field' parameter".to_string()))?;
    let field = parse_field(&key)?;

    Ok(Json(AverageResponse::compute(state.table.records(), field)?))
}

#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    pub x: Option<String>,
    pub y: Option<String>,
}

pub async fn scatter(
    State(state): State<AppState>,
    Query(params): Query<ScatterParams>,
) -> Result<Response, ApiError> {
    let (default_x, default_y) = state
        .dashboard
        .scatter_axes()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let x = params.x.as_deref().map(parse_field).transpose()?.unwrap_or(default_x);
    let y = params.y.as_deref().map(parse_field).transpose()?.unwrap_or(default_y);

    Ok(Json(calculate::scatter(state.table.records(), x, y)).into_response())
}
