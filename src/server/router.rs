use crate::cache::HeroCache;
use crate::server::routes::{heroes, monitor};
use herodex_catalog::HeroIndex;
use herodex_monitor::{CacheMonitor, MonitoredStore};

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[derive(Clone)]
pub struct HerodexState {
    pub index: Arc<HeroIndex>,
    pub heroes: Arc<MonitoredStore<HeroCache>>,
}

impl HerodexState {
    pub fn new(index: HeroIndex, cache: HeroCache, monitor: Arc<CacheMonitor>) -> Self {
        Self {
            index: Arc::new(index),
            heroes: Arc::new(MonitoredStore::new(cache, monitor)),
        }
    }

    pub fn monitor(&self) -> &Arc<CacheMonitor> {
        self.heroes.monitor()
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id` for easier correlation, even if the client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms,
            user_agent
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms,
            user_agent
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms,
            user_agent
        );
    }

    resp
}

pub fn herodex_router(state: HerodexState) -> Router {
    Router::new()
        .merge(heroes::router())
        .merge(monitor::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
