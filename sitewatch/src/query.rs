//! 参照系オペレーション
//!
//! HTTP層から呼ばれる読み取り操作。見つからない場合は `None`。

use crate::registry::{AvailabilityStore, RequestCounter};
use crate::types::{SiteLatency, SiteRecord};
use std::collections::BTreeMap;

/// サイト参照サービス
#[derive(Clone)]
pub struct SiteQuery {
    availability: AvailabilityStore,
    counter: RequestCounter,
}

impl SiteQuery {
    /// ストアを受け取ってサービスを作成
    pub fn new(availability: AvailabilityStore, counter: RequestCounter) -> Self {
        Self {
            availability,
            counter,
        }
    }

    /// サイト名で最新レコードを取得する
    ///
    /// 見つかった場合のみ参照回数を増やす。
    pub async fn lookup_site(&self, name: &str) -> Option<SiteRecord> {
        let record = self.availability.get(name).await?;
        self.counter.increment(name).await;
        Some(record)
    }

    /// 最も遅い利用可能サイト
    pub async fn slowest_site(&self) -> Option<SiteLatency> {
        self.availability.max_response_time_site().await
    }

    /// 最も速い利用可能サイト
    pub async fn fastest_site(&self) -> Option<SiteLatency> {
        self.availability.min_response_time_site().await
    }

    /// サイト別の参照回数
    pub async fn statistics(&self) -> BTreeMap<String, u64> {
        self.counter.snapshot().await
    }
}
