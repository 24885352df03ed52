use crate::server::router::HerodexState;
use herodex_monitor::CacheStats;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

/// Stats payload served by `GET /monitor/stats`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            stats,
            hit_rate: stats.hit_rate(),
        }
    }
}

pub async fn stats_handler(State(state): State<HerodexState>) -> Json<StatsResponse> {
    Json(state.monitor().stats().into())
}

pub async fn stats_reset_handler(State(state): State<HerodexState>) -> (StatusCode, &'static str) {
    state.monitor().reset();
    (StatusCode::ACCEPTED, "Success")
}

pub fn router() -> Router<HerodexState> {
    Router::new()
        .route("/monitor/stats", get(stats_handler))
        .route("/monitor/stats:reset", post(stats_reset_handler))
}
