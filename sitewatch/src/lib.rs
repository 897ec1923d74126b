//! sitewatch
//!
//! 設定されたWebサイトを定期的にHTTPでプローブし、可用性と応答時間を記録して
//! 参照APIで公開するサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// Basic認証
pub mod auth;

/// CLIインターフェース
pub mod cli;

/// 設定管理（TOML設定ファイル）
pub mod config;

/// エラー型
pub mod error;

/// ヘルスチェック監視
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 参照系オペレーション
pub mod query;

/// 可用性ストア・リクエストカウンター
pub mod registry;

/// axumサーバー
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// 型定義
pub mod types;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 参照サービス（可用性ストア + カウンター）
    pub query: query::SiteQuery,
    /// 統計APIの資格情報
    pub credentials: auth::Credentials,
}
