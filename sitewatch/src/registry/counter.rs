//! リクエストカウンター
//!
//! サイトごとの参照回数。キー集合は起動時の設定サイトで固定される。

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// サイト別の参照回数カウンター
#[derive(Clone, Default)]
pub struct RequestCounter {
    counts: Arc<RwLock<HashMap<String, u64>>>,
}

impl RequestCounter {
    /// 既知サイトを0で初期化したカウンターを作成
    pub async fn new<S: AsRef<str>>(sites: &[S]) -> Self {
        let counter = Self::default();
        counter.init(sites).await;
        counter
    }

    /// 全サイトを0にリセット（既存のキーは破棄される）
    pub async fn init<S: AsRef<str>>(&self, sites: &[S]) {
        let mut counts = self.counts.write().await;
        *counts = sites
            .iter()
            .map(|site| (site.as_ref().to_string(), 0))
            .collect();
    }

    /// 参照回数を1増やす。未知のサイトは無視する
    pub async fn increment(&self, site: &str) {
        let mut counts = self.counts.write().await;
        if let Some(count) = counts.get_mut(site) {
            *count += 1;
        }
    }

    /// 現在値のコピーを取得（サイト名順）
    pub async fn snapshot(&self) -> BTreeMap<String, u64> {
        let counts = self.counts.read().await;
        counts
            .iter()
            .map(|(site, count)| (site.clone(), *count))
            .collect()
    }
}
