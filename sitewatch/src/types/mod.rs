//! 型定義モジュール
//!
//! ドメインエンティティの型定義を提供

/// サイト可用性関連の型定義
pub mod site;

pub use site::{SiteLatency, SiteRecord};
