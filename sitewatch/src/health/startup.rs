//! 起動時のヘルスチェック
//!
//! 起動時に全サイトを並列チェック

use super::{CycleSummary, SiteChecker};
use tracing::info;

/// 起動時の初期チェック
///
/// APIを公開する前に全サイトを一度チェックし、ストアを埋めておく。
/// 個々のプローブ失敗は利用不可として記録されるだけで、エラーにはならない。
pub async fn run_startup_check(checker: &SiteChecker) -> CycleSummary {
    if checker.sites().is_empty() {
        info!("No sites configured; skipping startup check");
        return CycleSummary::default();
    }

    info!(count = checker.sites().len(), "Running startup availability check...");
    let summary = checker.check_all_sites().await;
    info!("Startup availability check completed");
    summary
}
