//! 可用性ストア
//!
//! サイトごとの最新プローブ結果を保持する。

use crate::types::{SiteLatency, SiteRecord};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 可用性ストア
///
/// サイト識別子 → 最新の[`SiteRecord`]。エントリは上書きのみで削除されない。
#[derive(Clone, Default)]
pub struct AvailabilityStore {
    sites: Arc<RwLock<HashMap<String, SiteRecord>>>,
}

impl AvailabilityStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// サイトの最新レコードを取得
    ///
    /// 一度もプローブが完了していないサイト（未知のサイトを含む）は `None`。
    pub async fn get(&self, site: &str) -> Option<SiteRecord> {
        let sites = self.sites.read().await;
        sites.get(site).copied()
    }

    /// レコードを上書き保存
    pub async fn set(&self, site: &str, record: SiteRecord) {
        let mut sites = self.sites.write().await;
        sites.insert(site.to_string(), record);
    }

    /// 応答時間が最大の利用可能サイト
    pub async fn max_response_time_site(&self) -> Option<SiteLatency> {
        // 同値の場合は名前が小さい方を優先
        self.select_available(|a, b| {
            a.1.response_time()
                .cmp(&b.1.response_time())
                .then_with(|| b.0.cmp(a.0))
        })
        .await
    }

    /// 応答時間が最小の利用可能サイト
    pub async fn min_response_time_site(&self) -> Option<SiteLatency> {
        self.select_available(|a, b| {
            b.1.response_time()
                .cmp(&a.1.response_time())
                .then_with(|| b.0.cmp(a.0))
        })
        .await
    }

    /// 利用可能なエントリのうち `compare` で最大のものを返す
    async fn select_available<F>(&self, compare: F) -> Option<SiteLatency>
    where
        F: Fn(&(&String, &SiteRecord), &(&String, &SiteRecord)) -> Ordering,
    {
        let sites = self.sites.read().await;
        sites
            .iter()
            .filter(|(_, record)| record.is_available())
            .max_by(|a, b| compare(a, b))
            .map(|(site, record)| SiteLatency {
                site_name: site.clone(),
                response_time: record.response_time(),
            })
    }

    /// 保持しているサイト数
    pub async fn len(&self) -> usize {
        self.sites.read().await.len()
    }

    /// 一度もプローブ結果を保持していないか
    pub async fn is_empty(&self) -> bool {
        self.sites.read().await.is_empty()
    }
}
