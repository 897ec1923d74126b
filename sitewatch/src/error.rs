//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::Config`]
    #[error("Incorrect config format: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config values are out of range
    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Failure of a single site probe.
///
/// Never leaves the checker: every variant is downgraded to an unavailable
/// record.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Connection, DNS or timeout failure before a response arrived
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Response body could not be read to the end
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// Site answered with a server error status
    #[error("server error status {0}")]
    ServerError(reqwest::StatusCode),
}

/// sitewatch error type
#[derive(Debug, Error)]
pub enum SitewatchError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or wrong credentials
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SitewatchError {
    /// Returns a safe error message for external clients.
    ///
    /// Full details are only written to the server log.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Not found",
            Self::Authentication(_) => "Not authorized",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
