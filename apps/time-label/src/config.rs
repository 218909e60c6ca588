//! # time-label 設定
//!
//! 環境変数から時刻ソースの選択を読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `TIME_LABEL_CLOCK` | No | `local` | システム時刻のタイムゾーン（`local` / `utc`） |
//! | `TIME_LABEL_FIXED_TIME` | No | - | `HH:MM`。設定時はシステム時刻の代わりに固定時刻を使う |

use std::{env, sync::Arc};

use timelabel_domain::{ClockZone, FixedTimeSource, SystemTimeSource, TimePoint, TimeSource};

use crate::error::ConfigError;

const CLOCK_VAR: &str = "TIME_LABEL_CLOCK";
const FIXED_TIME_VAR: &str = "TIME_LABEL_FIXED_TIME";

/// time-label の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    /// システム時刻のタイムゾーン
    pub clock:      ClockZone,
    /// 固定時刻（設定時は `clock` より優先）
    pub fixed_time: Option<TimePoint>,
}

impl LabelConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var(CLOCK_VAR).ok().as_deref(),
            env::var(FIXED_TIME_VAR).ok().as_deref(),
        )
    }

    /// 環境変数の値から設定を組み立てる
    pub fn from_vars(clock: Option<&str>, fixed_time: Option<&str>) -> Result<Self, ConfigError> {
        let clock = match clock {
            Some(value) => value
                .parse::<ClockZone>()
                .map_err(|_| ConfigError::InvalidClock(value.to_string()))?,
            None => ClockZone::default(),
        };
        let fixed_time = fixed_time.map(parse_fixed_time).transpose()?;

        Ok(Self { clock, fixed_time })
    }

    /// 設定に応じた時刻ソースを作成する
    pub fn time_source(&self) -> Arc<dyn TimeSource> {
        match self.fixed_time {
            Some(time) => Arc::new(FixedTimeSource::new(time)),
            None => Arc::new(SystemTimeSource::new(self.clock)),
        }
    }
}

fn parse_fixed_time(value: &str) -> Result<TimePoint, ConfigError> {
    let invalid = || ConfigError::InvalidFixedTime(value.to_string());

    let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hour = hour.parse::<u32>().map_err(|_| invalid())?;
    let minute = minute.parse::<u32>().map_err(|_| invalid())?;

    TimePoint::from_hm(hour, minute).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_未設定ならローカル時刻を使う() {
        let config = LabelConfig::from_vars(None, None).unwrap();

        assert_eq!(
            config,
            LabelConfig {
                clock:      ClockZone::Local,
                fixed_time: None,
            }
        );
    }

    #[test]
    fn test_clockにutcを指定できる() {
        let config = LabelConfig::from_vars(Some("utc"), None).unwrap();

        assert_eq!(config.clock, ClockZone::Utc);
    }

    #[test]
    fn test_不正なclockはエラーになる() {
        let result = LabelConfig::from_vars(Some("jst"), None);

        assert!(matches!(result, Err(ConfigError::InvalidClock(value)) if value == "jst"));
    }

    #[rstest]
    #[case("00:01", 0, 1)]
    #[case("9:05", 9, 5)]
    #[case(" 23:59 ", 23, 59)]
    fn test_固定時刻をパースできる(#[case] input: &str, #[case] hour: u32, #[case] minute: u32) {
        let config = LabelConfig::from_vars(None, Some(input)).unwrap();

        assert_eq!(config.fixed_time, Some(TimePoint::from_hm(hour, minute).unwrap()));
    }

    #[rstest]
    #[case("1200", "区切りなし")]
    #[case("12:xx", "数値でない")]
    #[case("-1:00", "負数")]
    #[case("", "空文字列")]
    fn test_不正な固定時刻はエラーになる(#[case] input: &str, #[case] _reason: &str) {
        let result = LabelConfig::from_vars(None, Some(input));

        assert!(matches!(result, Err(ConfigError::InvalidFixedTime(_))));
    }

    #[test]
    fn test_範囲外の固定時刻はエラーになる() {
        let result = LabelConfig::from_vars(None, Some("24:00"));

        assert!(matches!(result, Err(ConfigError::FixedTimeOutOfRange(_))));
    }

    #[test]
    fn test_固定時刻が設定されていれば固定時刻ソースを使う() {
        let config = LabelConfig::from_vars(Some("utc"), Some("12:00")).unwrap();

        let time = config.time_source().get_time().unwrap();

        assert_eq!(time, TimePoint::from_hm(12, 0).unwrap());
    }
}
