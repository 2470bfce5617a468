//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::{GeoPoint, Station, StationId};
use crate::places::{PlacesError, PlacesProvider};
use crate::proximity::{self, SearchError};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

const MISSING_PARAMS: &str = "Missing required parameters: lat, lng, distance";
const MISSING_DISTANCE: &str = "Missing required parameter: distance";
const STATION_NOT_FOUND: &str = "Station not found";
const SEARCH_FAILED: &str = "Failed to search restaurants";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:id", get(get_station))
        .route("/api/stations/:id/restaurants", get(station_restaurants))
        .route("/api/restaurants", get(search_restaurants))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the station picker and map.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = IndexTemplate::new(state.stations.list())
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;
    Ok(Html(html))
}

/// All stations, in line order.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.stations.list().to_vec())
}

/// A single station by id.
async fn get_station(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<Station>, AppError> {
    let station = resolve_station(&state, &id)?;
    Ok(Json(station.clone()))
}

/// Restaurants near a coordinate.
async fn search_restaurants(
    State(state): State<AppState>,
    Query(req): Query<RestaurantSearchRequest>,
) -> Result<Json<Vec<RestaurantResult>>, AppError> {
    let (Some(lat), Some(lng), Some(distance)) = (
        non_empty(req.lat.as_deref()),
        non_empty(req.lng.as_deref()),
        non_empty(req.distance.as_deref()),
    ) else {
        return Err(AppError::BadRequest {
            message: MISSING_PARAMS.to_string(),
        });
    };

    let origin = GeoPoint::new(parse_number("lat", lat)?, parse_number("lng", lng)?);
    let radius_miles = parse_number("distance", distance)?;

    let query = proximity::Query::new(origin, radius_miles)
        .with_category(req.cuisine.unwrap_or_default());

    run_search(&state, &query).await
}

/// Restaurants near a station.
async fn station_restaurants(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Query(req): Query<StationRestaurantsRequest>,
) -> Result<Json<Vec<RestaurantResult>>, AppError> {
    let origin = resolve_station(&state, &id)?.location;

    let distance = non_empty(req.distance.as_deref()).ok_or_else(|| AppError::BadRequest {
        message: MISSING_DISTANCE.to_string(),
    })?;
    let radius_miles = parse_number("distance", distance)?;

    let query = proximity::Query::new(origin, radius_miles)
        .with_category(req.cuisine.unwrap_or_default());

    run_search(&state, &query).await
}

/// Fetch candidates for the query area and rank them.
async fn run_search(
    state: &AppState,
    query: &proximity::Query,
) -> Result<Json<Vec<RestaurantResult>>, AppError> {
    // Reject a bad radius before touching the provider
    query.validate()?;

    let candidates = state
        .places
        .nearby(query.origin, query.radius_miles)
        .await?;

    let results = proximity::search(query, &candidates[..])?;

    Ok(Json(
        results.iter().map(RestaurantResult::from_ranked).collect(),
    ))
}

/// Look up a station from a path segment.
///
/// A malformed id is reported the same as an unknown one.
fn resolve_station<'a>(state: &'a AppState, id: &str) -> Result<&'a Station, AppError> {
    let not_found = || AppError::NotFound {
        message: STATION_NOT_FOUND.to_string(),
    };
    let id = StationId::parse(id).map_err(|_| not_found())?;
    state.stations.get(id).map_err(|_| not_found())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a finite decimal number from a query parameter.
fn parse_number(name: &str, value: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| AppError::BadRequest {
            message: format!("Invalid {name}: expected a number, got {value:?}"),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidArgument(message) => AppError::BadRequest { message },
        }
    }
}

impl From<PlacesError> for AppError {
    fn from(e: PlacesError) -> Self {
        error!(error = %e, "places lookup failed");
        AppError::Internal {
            message: SEARCH_FAILED.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
