//! # time-label ドメイン層
//!
//! 時刻の読み取り値を短い HTML ラベル（"Midnight" / "Noon" / "h:mm a"）に
//! 整形する。時刻ソースが失敗した場合はエラーラベルに縮退する。
//!
//! ## 設計方針
//!
//! 現在時刻への依存は [`TimeSource`] トレイトとして注入する。
//! 本番では [`SystemTimeSource`] を、テストでは固定値・動的設定・失敗注入の
//! テストダブルを差し込み、整形ロジックの全分岐を決定的に検証できるようにする。
//!
//! ```text
//! TimeDisplay ──▶ dyn TimeSource ◀── SystemTimeSource（本番）
//!                                 ◀── FixedTimeSource（固定値）
//!                                 ◀── StubTimeSource（test-support）
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - 時刻ソース・時刻値のエラー定義
//! - [`time_point`] - 時刻ソースが返す読み取り値
//! - [`time_source`] - 時刻ソースのトレイトと本番実装
//! - [`time_display`] - HTML フラグメントの生成
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use timelabel_domain::{FixedTimeSource, TimeDisplay, TimePoint};
//!
//! let noon = TimePoint::from_hm(12, 0).unwrap();
//! let display = TimeDisplay::with_time_provider(Arc::new(FixedTimeSource::new(noon)));
//!
//! assert_eq!(
//!     display.current_time_as_html_fragment(),
//!     r#"<span class="tinyBoldText">Noon</span>"#
//! );
//! ```

pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod time_display;
pub mod time_point;
pub mod time_source;

pub use error::{TimePointError, TimeSourceError};
pub use time_display::{INVALID_TIME_FRAGMENT, TimeDisplay, TimeLabel};
pub use time_point::TimePoint;
pub use time_source::{ClockZone, FixedTimeSource, SystemTimeSource, TimeSource};
