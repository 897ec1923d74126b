//! Contract Test: GET /services/:name, /services/slowest, /services/fastest

use crate::support::test_state;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sitewatch::api;
use sitewatch::types::SiteRecord;
use tower::ServiceExt;

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_lookup_site_returns_record() {
    let (state, availability) = test_state(&["a.test", "b.test"]).await;
    availability.set("a.test", SiteRecord::available(150)).await;
    availability.set("b.test", SiteRecord::unavailable()).await;
    let app = api::create_router(state);

    let (status, body) = get(&app, "/services/a.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response_time": 150, "available": true}));

    let (status, body) = get(&app, "/services/b.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response_time": 0, "available": false}));
}

#[tokio::test]
async fn test_lookup_unknown_site_is_404() {
    let (state, _) = test_state(&["a.test"]).await;
    let app = api::create_router(state);

    let (status, body) = get(&app, "/services/a.test").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));

    let (status, _) = get(&app, "/services/nowhere.test").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_slowest_and_fastest() {
    let (state, availability) = test_state(&["a.test", "b.test", "c.test"]).await;
    availability.set("a.test", SiteRecord::available(150)).await;
    availability.set("b.test", SiteRecord::available(30)).await;
    availability.set("c.test", SiteRecord::unavailable()).await;
    let app = api::create_router(state);

    let (status, body) = get(&app, "/services/slowest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"site_name": "a.test", "response_time": 150}));

    let (status, body) = get(&app, "/services/fastest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"site_name": "b.test", "response_time": 30}));
}

#[tokio::test]
async fn test_slowest_and_fastest_404_without_available_sites() {
    let (state, availability) = test_state(&["a.test"]).await;
    let app = api::create_router(state);

    assert_eq!(get(&app, "/services/slowest").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/services/fastest").await.0, StatusCode::NOT_FOUND);

    availability.set("a.test", SiteRecord::unavailable()).await;

    assert_eq!(get(&app, "/services/slowest").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/services/fastest").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_routes_take_priority_over_site_names() {
    // 静的ルートが優先され、slowestという名前のサイトは参照できない
    let (state, availability) = test_state(&["slowest"]).await;
    availability.set("slowest", SiteRecord::available(5)).await;
    let app = api::create_router(state);

    let (status, body) = get(&app, "/services/slowest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site_name"], "slowest");
}
