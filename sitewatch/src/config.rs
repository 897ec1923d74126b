//! 設定管理
//!
//! TOML設定ファイルの読み込みと検証

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// 設定全体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP API設定
    #[serde(default)]
    pub http: HttpConfig,

    /// 可用性チェック設定
    #[serde(default)]
    pub availability_check: AvailabilityCheckConfig,
}

/// HTTP API設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// バインドアドレス (デフォルト: "0.0.0.0:8080")
    #[serde(default = "default_address")]
    pub address: String,

    /// リクエスト処理のタイムアウト（ミリ秒）(デフォルト: 5000)
    ///
    /// 読み込み・処理・書き込みを含むリクエスト全体に適用する。
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// 統計APIのBasic認証ユーザー名
    #[serde(default)]
    pub auth_login: String,

    /// 統計APIのBasic認証パスワード
    #[serde(default)]
    pub auth_password: String,
}

/// 可用性チェック設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityCheckConfig {
    /// チェック間隔（分）(デフォルト: 1)
    #[serde(default = "default_check_interval_minutes")]
    pub check_interval_minutes: u64,

    /// 1サイトあたりのタイムアウト（ミリ秒）(デフォルト: 2000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// 監視対象サイト（スキーマなしのホスト名）
    #[serde(default)]
    pub sites: Vec<String>,
}

fn default_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_check_interval_minutes() -> u64 {
    1
}

fn default_timeout_ms() -> u64 {
    2000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            request_timeout_ms: default_request_timeout_ms(),
            auth_login: String::new(),
            auth_password: String::new(),
        }
    }
}

impl Default for AvailabilityCheckConfig {
    fn default() -> Self {
        Self {
            check_interval_minutes: default_check_interval_minutes(),
            timeout_ms: default_timeout_ms(),
            sites: Vec::new(),
        }
    }
}

impl HttpConfig {
    /// リクエスト処理のタイムアウト
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl AvailabilityCheckConfig {
    /// チェック間隔
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_minutes.saturating_mul(60))
    }

    /// 1サイトあたりのタイムアウト
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// 設定ファイルを読み込み、検証する
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// TOML文字列から設定を生成し、検証する
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 値の範囲を検証し、重複サイトを除去する
    ///
    /// 重複は最初の出現を残して除去し、警告ログを出す。
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.http.address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "http.address must not be empty".to_string(),
            ));
        }
        if self.http.request_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "http.request_timeout_ms must be greater than 0".to_string(),
            ));
        }
        let check = &mut self.availability_check;
        if check.check_interval_minutes == 0 {
            return Err(ConfigError::Validation(
                "availability_check.check_interval_minutes must be greater than 0".to_string(),
            ));
        }
        if check.check_interval_minutes.checked_mul(60).is_none() {
            return Err(ConfigError::Validation(format!(
                "availability_check.check_interval_minutes is too large: {}",
                check.check_interval_minutes
            )));
        }
        if check.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "availability_check.timeout_ms must be greater than 0".to_string(),
            ));
        }
        if let Some(site) = check.sites.iter().find(|site| site.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "availability_check.sites contains an empty entry: {:?}",
                site
            )));
        }

        let mut seen = HashSet::new();
        check.sites.retain(|site| {
            let first = seen.insert(site.clone());
            if !first {
                warn!(site = %site, "Duplicate site in config, ignoring");
            }
            first
        });

        Ok(())
    }
}
