//! HTTP surface of the TLE backend
use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use tle_common::{LookupResponse, SatelliteListResponse};

use crate::config::BackendConfig;
use crate::module::tle::Catalog;

const TLE_ROUTE_PREFIX: &str = "/api/tle/";

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            started_at: Utc::now(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Build the application router
pub fn build_router(state: AppState, config: &BackendConfig) -> Router {
    let router = Router::new()
        .route("/api/tle/{sat_name}", get(get_tle))
        .route("/api/satellites", get(list_satellites))
        .route("/health", get(health_check))
        .route("/stats", get(stats))
        .with_state(state);

    // Wildcard origins cannot carry credentials, so the very permissive
    // policy mirrors the request's origin, method and headers instead.
    let router = if config.enable_cors {
        router.layer(CorsLayer::very_permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

/// Percent-decode the `{sat_name}` segment of a request path
///
/// Invalid UTF-8 becomes U+FFFD rather than a rejection, so every query
/// reaches the catalog.
fn decode_sat_name(path: &str) -> String {
    let raw = path.strip_prefix(TLE_ROUTE_PREFIX).unwrap_or(path);
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// `GET /api/tle/{sat_name}`
///
/// Not-found is a normal 200 response carrying the error payload.
async fn get_tle(State(state): State<AppState>, uri: Uri) -> Json<LookupResponse> {
    let sat_name = decode_sat_name(uri.path());
    info!("TLE request: {}", sat_name);

    match state.catalog.lookup(&sat_name) {
        Some(found) => {
            debug!(
                "Matched '{}' to '{}' ({})",
                sat_name, found.entry.name, found.match_type
            );
            Json(LookupResponse::Found(found.entry.clone()))
        }
        None => {
            warn!("No satellite matches '{}'", sat_name);
            Json(LookupResponse::not_found())
        }
    }
}

/// `GET /api/satellites`
async fn list_satellites(State(state): State<AppState>) -> Json<SatelliteListResponse> {
    Json(SatelliteListResponse {
        satellites: state.catalog.names(),
    })
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Basic server information
async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "running",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "satellites": state.catalog.len(),
        "started_at": state.started_at.to_rfc3339(),
    }))
}
