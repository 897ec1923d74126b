//! REST APIハンドラー
//!
//! サイト可用性の参照API

pub mod error;
pub mod services;

use crate::auth::middleware::basic_auth_middleware;
use crate::AppState;
use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
///
/// `/services/statistics` のみBasic認証で保護する。
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/services/statistics", get(services::statistics))
        .layer(middleware::from_fn_with_state(
            state.credentials.clone(),
            basic_auth_middleware,
        ));

    Router::new()
        .route("/services/slowest", get(services::slowest_site))
        .route("/services/fastest", get(services::fastest_site))
        .route("/services/:name", get(services::lookup_site))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
