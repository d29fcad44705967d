//! API Handlers
//!
//! HTTP request handlers for each station inventory endpoint. Handlers stay
//! thin: all query, cache, and mutation logic lives in `StationService`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{
    BikeSummary, HealthResponse, PagedStationsResponse, Station, StationListQuery,
    StationResponse,
};
use crate::service::StationService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store + cache behind one handle; also held by the refresh task.
    pub service: StationService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: StationService) -> Self {
        Self { service }
    }
}

/// Handler for GET /api/v1/stations
///
/// Lists stations with optional search, status, and minimum-bikes filters,
/// a sort key/direction, and pagination. Filter inputs never fail; they
/// degrade to defaults.
pub async fn list_stations(
    State(state): State<AppState>,
    Query(params): Query<StationListQuery>,
) -> Json<PagedStationsResponse> {
    let page = state.service.query(&params).await;

    Json(PagedStationsResponse {
        page: params.page(),
        page_size: params.page_size(),
        total_count: page.total_count,
        items: page.items.iter().map(StationResponse::from).collect(),
    })
}

/// Handler for GET /api/v1/stations/:number
pub async fn get_station(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> Result<Json<StationResponse>> {
    let station = state
        .service
        .get_by_number(number)
        .await
        .ok_or(ApiError::NotFound(number))?;

    Ok(Json(StationResponse::from(&station)))
}

/// Handler for GET /api/v1/stations/summary
pub async fn get_summary(State(state): State<AppState>) -> Json<BikeSummary> {
    Json(state.service.summary().await)
}

/// Handler for POST /api/v1/stations
///
/// Creates a station, assigning the next free number when the body carries
/// none. Responds 201 with the stored record.
pub async fn create_station(
    State(state): State<AppState>,
    Json(body): Json<Station>,
) -> Result<(StatusCode, Json<StationResponse>)> {
    let created = state.service.create(body).await?;

    Ok((StatusCode::CREATED, Json(StationResponse::from(&created))))
}

/// Handler for PUT /api/v1/stations/:number
///
/// Replaces a station's fields. The body's number must match the URL.
pub async fn update_station(
    State(state): State<AppState>,
    Path(number): Path<i64>,
    Json(body): Json<Station>,
) -> Result<Json<StationResponse>> {
    if body.number != number {
        return Err(ApiError::InvalidRequest(
            "URL number must match the station number in the body".to_string(),
        ));
    }

    let updated = state.service.update(number, body).await?;
    Ok(Json(StationResponse::from(&updated)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
