//! サイト状態管理
//!
//! プローブ結果とアクセス回数をメモリ内で管理する。永続化はしない。

pub mod availability;
pub mod counter;

pub use availability::AvailabilityStore;
pub use counter::RequestCounter;
