//! # 時刻の読み取り値
//!
//! 時刻ソースが返す値。日付を含む `NaiveDateTime` をそのまま保持するが、
//! 表示ロジックが参照するのは時と分だけである。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::TimePointError;

/// 12 時間制の表示書式（例: `1:05 PM`、時はゼロ埋めしない）
const CLOCK_FORMAT: &str = "%-I:%M %p";

/// 時刻ソースの読み取り値
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct TimePoint(NaiveDateTime);

impl TimePoint {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    /// 時・分から読み取り値を作成する
    ///
    /// 日付は 1970-01-01 に固定される。時は 0〜23、分は 0〜59 のみ受け付ける。
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimePointError> {
        if hour > 23 {
            return Err(TimePointError::HourOutOfRange(hour));
        }
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(TimePointError::MinuteOutOfRange(minute))?;

        Ok(Self(NaiveDate::default().and_time(time)))
    }

    /// 時（0〜23）
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// 分（0〜59）
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    /// `h:mm a` 形式（12 時間制、大文字の AM/PM）で整形する
    pub fn to_clock_string(self) -> String {
        self.0.format(CLOCK_FORMAT).to_string()
    }
}
