use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use herodex::cache::HeroCache;
use herodex::server::router::{HerodexState, herodex_router};
use herodex_catalog::HeroIndex;
use herodex_monitor::CacheMonitor;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let monitor = Arc::new(CacheMonitor::new());
    let state = HerodexState::new(HeroIndex::from_builtin(), HeroCache::new(300, 64), monitor);
    herodex_router(state)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_str = std::str::from_utf8(&body)
        .expect("response body was not utf-8")
        .to_string();
    (status, body_str)
}

#[tokio::test]
async fn stats_reflect_lookup_traffic_and_reset_zeroes_them() {
    let app = test_app();

    // 1) fresh monitor -> all zero
    let (status, body) = send(&app, "GET", "/monitor/stats").await;
    assert_eq!(status, StatusCode::OK);
    let stats: serde_json::Value = serde_json::from_str(&body).expect("valid JSON body");
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 0);
    assert_eq!(stats["sets"], 0);
    assert_eq!(stats["deletes"], 0);
    assert_eq!(stats["hitRate"], 0.0);

    // 2) first lookup misses the cache and populates it
    let (status, _) = send(&app, "GET", "/heroes/batman").await;
    assert_eq!(status, StatusCode::OK);

    // 3) second lookup under an equivalent spelling hits the cached entry
    let (status, _) = send(&app, "GET", "/heroes/BAT-MAN").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/monitor/stats").await;
    let stats: serde_json::Value = serde_json::from_str(&body).expect("valid JSON body");
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["sets"], 1);
    assert_eq!(stats["deletes"], 0);
    assert_eq!(stats["hitRate"], 0.5);

    // 4) reset zeroes the counters
    let (status, body) = send(&app, "POST", "/monitor/stats:reset").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, "Success");

    let (_, body) = send(&app, "GET", "/monitor/stats").await;
    let stats: serde_json::Value = serde_json::from_str(&body).expect("valid JSON body");
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 0);
    assert_eq!(stats["sets"], 0);
    assert_eq!(stats["deletes"], 0);
    assert_eq!(stats["hitRate"], 0.0);
}

#[tokio::test]
async fn failed_lookups_count_as_misses_without_sets() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/heroes/Thor").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/monitor/stats").await;
    let stats: serde_json::Value = serde_json::from_str(&body).expect("valid JSON body");
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["sets"], 0);
    assert_eq!(stats["hits"], 0);
}
