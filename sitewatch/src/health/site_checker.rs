//! サイト可用性チェッカー
//!
//! 設定された全サイトに `GET http://<site>` を並列に送信し、
//! 結果を[`AvailabilityStore`]に書き込む。

use crate::error::ProbeError;
use crate::registry::AvailabilityStore;
use crate::types::SiteRecord;
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// プローブURLのスキーマ（TLSは扱わない）
const SCHEMA: &str = "http://";

/// デフォルトのチェック間隔（秒）
const DEFAULT_CHECK_INTERVAL_SECS: u64 = 60;

/// サイトのプローブURL
pub fn probe_url(site: &str) -> String {
    format!("{}{}", SCHEMA, site)
}

/// 1サイクルの集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// 利用可能だったサイト数
    pub available: usize,
    /// 利用不可だったサイト数
    pub unavailable: usize,
}

impl CycleSummary {
    /// チェックしたサイト数
    pub fn total(&self) -> usize {
        self.available + self.unavailable
    }
}

/// サイト可用性チェッカー
///
/// クローンは同じストア・HTTPクライアントを共有する。
#[derive(Clone)]
pub struct SiteChecker {
    /// 監視対象サイト
    sites: Arc<[String]>,
    /// 結果の書き込み先
    store: AvailabilityStore,
    /// HTTPクライアント（リクエストタイムアウト設定済み）
    client: Client,
    /// チェック間隔
    check_interval: Duration,
}

impl SiteChecker {
    /// 新しいチェッカーを作成
    ///
    /// `timeout` は1サイトあたりの上限で、接続から本文の読み切りまでを含む。
    pub fn new(
        sites: Vec<String>,
        store: AvailabilityStore,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            sites: sites.into(),
            store,
            client,
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
        })
    }

    /// チェック間隔を設定（0は不可）
    pub fn with_interval(mut self, check_interval: Duration) -> Self {
        self.check_interval = check_interval;
        self
    }

    /// 監視対象サイト
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// チェック間隔
    pub fn check_interval(&self) -> Duration {
        self.check_interval
    }

    /// バックグラウンドで定期チェックを開始
    ///
    /// 初回チェックは呼び出し側（[`super::startup::run_startup_check`]）で済ませている
    /// 前提で、最初のサイクルは1間隔後に実行される。
    pub fn start(self) -> CheckerHandle {
        let token = CancellationToken::new();
        let loop_token = token.clone();
        let task = tokio::spawn(async move {
            self.monitor_loop(loop_token).await;
        });
        CheckerHandle { token, task }
    }

    /// 監視ループ
    async fn monitor_loop(&self, token: CancellationToken) {
        let mut timer = interval(self.check_interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            interval_secs = self.check_interval.as_secs(),
            sites = self.sites.len(),
            "Site checker started"
        );

        // `interval()` ticks immediately on the first call.
        timer.tick().await;

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = timer.tick() => {}
            }

            // 停止要求で実行中のサイクルは破棄される（プローブタスクも中断）
            tokio::select! {
                _ = token.cancelled() => break,
                _ = self.check_all_sites() => {}
            }
        }

        info!("Site checker stopped");
    }

    /// 全サイトを並列にチェック
    ///
    /// 全プローブの完了（成功・失敗・タイムアウト）を待ってから戻る。
    /// 完了前にFutureがドロップされた場合、未完了のプローブタスクは中断される。
    pub async fn check_all_sites(&self) -> CycleSummary {
        let started = Instant::now();

        let handles: Vec<_> = self
            .sites
            .iter()
            .map(|site| {
                let checker = self.clone();
                let site = site.clone();
                tokio::spawn(async move { checker.check_site(&site).await })
            })
            .collect();
        let _abort_guard = AbortOnDrop(handles.iter().map(JoinHandle::abort_handle).collect());

        let mut summary = CycleSummary::default();
        for (site, result) in self.sites.iter().zip(join_all(handles).await) {
            match result {
                Ok(record) if record.is_available() => summary.available += 1,
                Ok(_) => summary.unavailable += 1,
                Err(e) => {
                    error!(site = %site, error = %e, "Probe task failed");
                    self.store.set(site, SiteRecord::unavailable()).await;
                    summary.unavailable += 1;
                }
            }
        }

        info!(
            available = summary.available,
            unavailable = summary.unavailable,
            total = summary.total(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Availability check completed"
        );

        summary
    }

    /// 単一サイトをチェックし、結果をストアに書き込む
    pub async fn check_site(&self, site: &str) -> SiteRecord {
        let record = match self.probe(site).await {
            Ok(elapsed) => {
                let response_time = elapsed.as_millis() as u64;
                debug!(site = %site, response_time_ms = response_time, "Site available");
                SiteRecord::available(response_time)
            }
            Err(e) => {
                info!(site = %site, error = %e, "Site unavailable");
                SiteRecord::unavailable()
            }
        };

        self.store.set(site, record).await;
        record
    }

    /// GETを送信し、本文を読み切るまでの経過時間を返す
    async fn probe(&self, site: &str) -> Result<Duration, ProbeError> {
        let url = probe_url(site);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProbeError::Request)?;
        let status = response.status();
        response.bytes().await.map_err(ProbeError::Body)?;
        let elapsed = start.elapsed();

        if status.is_server_error() {
            return Err(ProbeError::ServerError(status));
        }

        Ok(elapsed)
    }
}

/// ドロップ時に残っているタスクを中断する
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

/// 定期チェックタスクのハンドル
pub struct CheckerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl CheckerHandle {
    /// ループ停止用のトークン
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// ループが終了しているか
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// ループを停止し、終了を待つ
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(e) = self.task.await {
            error!(error = %e, "Site checker task failed");
        }
    }
}
