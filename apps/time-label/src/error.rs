//! # CLI エラー定義

use thiserror::Error;
use timelabel_domain::TimePointError;

/// 設定の読み込みで発生するエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `TIME_LABEL_CLOCK` が `local` / `utc` 以外
    #[error("TIME_LABEL_CLOCK は local または utc である必要があります: {0:?}")]
    InvalidClock(String),

    /// `TIME_LABEL_FIXED_TIME` が `HH:MM` 形式でない
    #[error("TIME_LABEL_FIXED_TIME は HH:MM 形式である必要があります: {0:?}")]
    InvalidFixedTime(String),

    /// `TIME_LABEL_FIXED_TIME` の時・分が範囲外
    #[error("TIME_LABEL_FIXED_TIME が範囲外です: {0}")]
    FixedTimeOutOfRange(#[from] TimePointError),
}
