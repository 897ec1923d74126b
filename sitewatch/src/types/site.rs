//! サイト可用性型定義
//!
//! プローブ結果（可用性レコード）と集計結果の型

use serde::Serialize;

/// サイトの可用性レコード
///
/// 最新プローブの結果。`available == false` のとき `response_time` は常に0
/// （計測値ではなく番兵値）。フィールドは非公開で、コンストラクタ経由でのみ
/// 生成できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteRecord {
    /// 応答時間（ミリ秒）
    response_time: u64,
    /// 可用性
    available: bool,
}

impl SiteRecord {
    /// 応答したサイトのレコードを作成
    pub fn available(response_time_ms: u64) -> Self {
        Self {
            response_time: response_time_ms,
            available: true,
        }
    }

    /// 応答しなかったサイトのレコードを作成
    pub fn unavailable() -> Self {
        Self {
            response_time: 0,
            available: false,
        }
    }

    /// 応答時間（ミリ秒）。利用不可の場合は0で、レイテンシとして扱ってはならない
    pub fn response_time(&self) -> u64 {
        self.response_time
    }

    /// 最新プローブで応答があったか
    pub fn is_available(&self) -> bool {
        self.available
    }
}

/// 最速/最遅サイトの集計結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteLatency {
    /// サイト識別子
    pub site_name: String,
    /// 応答時間（ミリ秒）
    pub response_time: u64,
}
