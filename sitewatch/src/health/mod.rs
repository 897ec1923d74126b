//! ヘルスチェックモニター
//!
//! 定期的にサイトの稼働状況と応答時間を計測する。
//!
//! 起動時に一度だけ同期的に全サイトをチェックし（[`startup`]）、
//! 以降は[`SiteChecker::start`]のバックグラウンドループが一定間隔で再チェックする。

pub mod site_checker;
pub mod startup;

pub use site_checker::{CheckerHandle, CycleSummary, SiteChecker};
