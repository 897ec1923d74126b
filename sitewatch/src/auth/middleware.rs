//! Basic認証ミドルウェア

use super::Credentials;
use crate::api::error::AppError;
use crate::error::SitewatchError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

const REALM: &str = r#"Basic realm="Restricted""#;

/// Basic認証ミドルウェア
///
/// 資格情報が無い・不正・不一致の場合は401と `WWW-Authenticate` を返す。
pub async fn basic_auth_middleware(
    State(credentials): State<Credentials>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let rejection = match request
        .headers()
        .get(header::AUTHORIZATION)
        .map(|h| h.to_str())
    {
        None => Some("missing Authorization header"),
        Some(Err(_)) => Some("Authorization header is not valid ASCII"),
        Some(Ok(value)) if !credentials.verify(value) => Some("invalid credentials"),
        Some(Ok(_)) => None,
    };

    if let Some(reason) = rejection {
        debug!(path = %request.uri().path(), reason, "Basic auth rejected");
        return Err(unauthorized(reason));
    }

    Ok(next.run(request).await)
}

fn unauthorized(reason: &str) -> Response {
    let mut response =
        AppError(SitewatchError::Authentication(reason.to_string())).into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(REALM));
    response
}
