//! サイト参照APIハンドラー

use super::error::AppError;
use crate::error::SitewatchError;
use crate::types::{SiteLatency, SiteRecord};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::BTreeMap;

/// GET /services/:name - サイトの最新レコード
pub async fn lookup_site(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SiteRecord>, AppError> {
    match state.query.lookup_site(&name).await {
        Some(record) => Ok(Json(record)),
        None => Err(SitewatchError::NotFound(name).into()),
    }
}

/// GET /services/slowest - 最も遅い利用可能サイト
pub async fn slowest_site(State(state): State<AppState>) -> Result<Json<SiteLatency>, AppError> {
    state
        .query
        .slowest_site()
        .await
        .map(Json)
        .ok_or_else(|| SitewatchError::NotFound("no available sites".to_string()).into())
}

/// GET /services/fastest - 最も速い利用可能サイト
pub async fn fastest_site(State(state): State<AppState>) -> Result<Json<SiteLatency>, AppError> {
    state
        .query
        .fastest_site()
        .await
        .map(Json)
        .ok_or_else(|| SitewatchError::NotFound("no available sites".to_string()).into())
}

/// GET /services/statistics - サイト別の参照回数
pub async fn statistics(State(state): State<AppState>) -> Json<BTreeMap<String, u64>> {
    Json(state.query.statistics().await)
}
