//! # TimeSource（時刻ソース）
//!
//! `Local::now()` / `Utc::now()` の直接呼び出しを置き換え、
//! テストで任意の時刻や失敗を注入可能にするための抽象化。

use chrono::{Local, Utc};

use crate::{TimePoint, TimeSourceError};

/// 現在時刻を提供するトレイト
///
/// 読み取り値の順序・鮮度・単調性は保証しない。
/// 「読み取り値を返すか、失敗するか」だけが契約である。
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource: Send + Sync {
    fn get_time(&self) -> Result<TimePoint, TimeSourceError>;
}

/// システム時刻をどのタイムゾーンで読むか
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ClockZone {
    /// OS のローカルタイムゾーン
    #[default]
    Local,
    /// 協定世界時
    Utc,
}

/// 実際のシステム時刻を返す実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource {
    zone: ClockZone,
}

impl SystemTimeSource {
    pub fn new(zone: ClockZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> ClockZone {
        self.zone
    }
}

impl TimeSource for SystemTimeSource {
    fn get_time(&self) -> Result<TimePoint, TimeSourceError> {
        let now = match self.zone {
            ClockZone::Local => Local::now().naive_local(),
            ClockZone::Utc => Utc::now().naive_utc(),
        };
        Ok(TimePoint::new(now))
    }
}

/// 固定時刻を返す実装
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    time: TimePoint,
}

impl FixedTimeSource {
    pub fn new(time: TimePoint) -> Self {
        Self { time }
    }
}

impl TimeSource for FixedTimeSource {
    fn get_time(&self) -> Result<TimePoint, TimeSourceError> {
        Ok(self.time)
    }
}
