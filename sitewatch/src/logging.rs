//! ロギング初期化ユーティリティ
//!
//! `SITEWATCH_LOG_LEVEL`（未設定なら `RUST_LOG`、既定は `info`）でフィルタを決める。

use tracing_subscriber::{fmt, EnvFilter};

/// ログレベル指定の環境変数
pub const LOG_LEVEL_ENV: &str = "SITEWATCH_LOG_LEVEL";

/// 既定のフィルタ
const DEFAULT_FILTER: &str = "info";

/// フィルタ文字列を決定する
pub fn filter_directive() -> String {
    resolve_directive(
        std::env::var(LOG_LEVEL_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    )
}

/// 優先順: `SITEWATCH_LOG_LEVEL` > `RUST_LOG` > 既定値。空文字は未設定扱い
fn resolve_directive(level: Option<String>, rust_log: Option<String>) -> String {
    level
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// グローバルsubscriberを初期化する
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter_directive())?;
    fmt().with_env_filter(filter).with_target(false).try_init()?;
    Ok(())
}
