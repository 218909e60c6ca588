//! # テストダブル
//!
//! `TimeDisplay` を決定的にテストするための手書きスタブ。
//! `test-support` feature 有効時のみ公開される。
//!
//! 固定値を返すスタブ（レスポンダ）と、失敗を注入するスタブ（セイボタージュ）を
//! 一つの型の設定違いとして提供する。
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use timelabel_domain::{INVALID_TIME_FRAGMENT, TimeDisplay, test_support::StubTimeSource};
//!
//! let mut stub = StubTimeSource::new();
//! stub.set_hours(0);
//! stub.set_minutes(1);
//! let display = TimeDisplay::with_time_provider(Arc::new(stub));
//! assert_eq!(
//!     display.current_time_as_html_fragment(),
//!     r#"<span class="tinyBoldText">Midnight</span>"#
//! );
//!
//! let saboteur = StubTimeSource::failing("Sample");
//! let display = TimeDisplay::with_time_provider(Arc::new(saboteur));
//! assert_eq!(display.current_time_as_html_fragment(), INVALID_TIME_FRAGMENT);
//! ```

use crate::{TimePoint, TimeSource, TimeSourceError};

/// 時・分を自由に設定できる時刻ソースのスタブ
///
/// 時・分は検証せずに保持する。範囲外の値は `get_time` の失敗になるため、
/// 「ありえない読み取り値」を注入する用途にも使える。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubTimeSource {
    hours:   u32,
    minutes: u32,
    failure: Option<String>,
}

impl StubTimeSource {
    /// 0 時 0 分を返すスタブを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した時刻を返すスタブを作成する
    ///
    /// `hours` は 24 時間制（10 = 午前 10 時、12 = 正午、22 = 午後 10 時、0 = 午前 0 時）。
    pub fn at(hours: u32, minutes: u32) -> Self {
        let mut stub = Self::new();
        stub.set_time(hours, minutes);
        stub
    }

    /// 常に失敗するスタブを作成する
    pub fn failing(reason: impl Into<String>) -> Self {
        let mut stub = Self::new();
        stub.fail_with(reason);
        stub
    }

    pub fn set_time(&mut self, hours: u32, minutes: u32) {
        self.set_hours(hours);
        self.set_minutes(minutes);
    }

    pub fn set_hours(&mut self, hours: u32) {
        self.hours = hours;
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes;
    }

    /// 以降の `get_time` を失敗させる。設定済みの時・分は無視される。
    pub fn fail_with(&mut self, reason: impl Into<String>) {
        self.failure = Some(reason.into());
    }
}

impl TimeSource for StubTimeSource {
    fn get_time(&self) -> Result<TimePoint, TimeSourceError> {
        if let Some(reason) = &self.failure {
            return Err(TimeSourceError::Unavailable(reason.clone()));
        }

        TimePoint::from_hm(self.hours, self.minutes)
            .map_err(|e| TimeSourceError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_newは0時0分を返す() {
        let stub = StubTimeSource::new();

        assert_eq!(stub.get_time(), Ok(TimePoint::from_hm(0, 0).unwrap()));
    }

    #[test]
    fn test_atはコンストラクタで渡した時刻を返す() {
        let stub = StubTimeSource::at(22, 15);

        assert_eq!(stub.get_time(), Ok(TimePoint::from_hm(22, 15).unwrap()));
    }

    #[test]
    fn test_setterで時と分を個別に変更できる() {
        let mut stub = StubTimeSource::at(10, 10);
        stub.set_hours(12);
        assert_eq!(stub.get_time(), Ok(TimePoint::from_hm(12, 10).unwrap()));

        stub.set_minutes(0);
        assert_eq!(stub.get_time(), Ok(TimePoint::from_hm(12, 0).unwrap()));
    }

    #[test]
    fn test_failingは理由付きで失敗する() {
        let stub = StubTimeSource::failing("Sample");

        assert_eq!(
            stub.get_time(),
            Err(TimeSourceError::Unavailable("Sample".to_string()))
        );
    }

    #[test]
    fn test_fail_withは設定済みの時刻より優先される() {
        let mut stub = StubTimeSource::at(12, 0);
        stub.fail_with("停止中");

        assert!(stub.get_time().is_err());
    }

    #[test]
    fn test_範囲外の時刻はunavailableとして失敗する() {
        let stub = StubTimeSource::at(25, 0);

        assert_eq!(
            stub.get_time(),
            Err(TimeSourceError::Unavailable(
                "時は 0〜23 の範囲である必要があります: 25".to_string()
            ))
        );
    }
}
