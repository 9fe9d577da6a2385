//! HTTP front end.
//!
//! | Route                     | Success                   |
//! |---------------------------|---------------------------|
//! | `GET /?lat=..&lon=..`     | nearest suburb's record   |
//! | `GET /nearest?lat=..&lon=..` | nearest coordinate     |
//! | `GET /stats`              | partition counts          |
//!
//! A suburb without content answers 404; an empty coordinate partition is
//! a server fault and answers 500.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use nearby_core::{
    ContentLookup, ContentRecord, GeoStore, LinearScan, NearbyError, Nearest, NearestSearch,
    StoreStats,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointQuery {
    pub lat: f64,
    pub lon: f64,
}

pub fn router(store: Arc<GeoStore>) -> Router {
    Router::new()
        .route("/", get(get_content))
        .route("/nearest", get(get_nearest))
        .route("/stats", get(get_stats))
        .with_state(store)
}

pub async fn serve(store: Arc<GeoStore>, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, router(store)).await?;
    Ok(())
}

async fn get_content(
    State(store): State<Arc<GeoStore>>,
    Query(q): Query<PointQuery>,
) -> ApiResult<ContentRecord> {
    blocking(store, move |store| {
        ContentLookup::new(store).resolve_content(q.lat, q.lon)
    })
    .await
}

async fn get_nearest(
    State(store): State<Arc<GeoStore>>,
    Query(q): Query<PointQuery>,
) -> ApiResult<Nearest> {
    blocking(store, move |store| LinearScan::new(store).nearest(q.lat, q.lon)).await
}

async fn get_stats(State(store): State<Arc<GeoStore>>) -> ApiResult<StoreStats> {
    blocking(store, |store| store.stats()).await
}

/// redb is synchronous; keep it off the async workers.
async fn blocking<T, F>(store: Arc<GeoStore>, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&GeoStore) -> nearby_core::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .map(Json)
        .map_err(to_response)
}

fn to_response(err: NearbyError) -> (StatusCode, String) {
    let status = match &err {
        NearbyError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "lookup failed");
    }
    (status, err.to_string())
}
