//! 認証機能
//!
//! 統計APIのHTTP Basic認証

pub mod middleware;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Basic認証の資格情報
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<(String, String)>,
}

impl Credentials {
    /// 資格情報を作成
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            inner: Arc::new((login.into(), password.into())),
        }
    }

    /// `Authorization` ヘッダー値を検証
    ///
    /// ユーザー名・パスワードとも定数時間で比較する。
    pub fn verify(&self, authorization: &str) -> bool {
        let Some((login, password)) = parse_basic_auth(authorization) else {
            return false;
        };
        let login_ok = login.as_bytes().ct_eq(self.inner.0.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.inner.1.as_bytes());
        bool::from(login_ok & password_ok)
    }
}

/// `Basic <base64(user:pass)>` を分解する
pub fn parse_basic_auth(authorization: &str) -> Option<(String, String)> {
    let encoded = authorization.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (login, password) = decoded.split_once(':')?;
    Some((login.to_string(), password.to_string()))
}
