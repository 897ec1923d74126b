//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::error::SitewatchError;
use axum::{response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub SitewatchError);

impl From<SitewatchError> for AppError {
    fn from(err: SitewatchError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Full error details are logged; clients only get external_message()
        if let SitewatchError::Internal(_) = &self.0 {
            error!(error = %self.0, "Request failed");
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (self.0.status_code(), Json(payload)).into_response()
    }
}
