//! # ドメイン層エラー定義
//!
//! 時刻ソースの失敗と、不正な時刻値を表現するエラー型。
//!
//! ## エラーの種類と扱い
//!
//! | エラー型 | 発生源 | `TimeDisplay` での扱い |
//! |---------|--------|------------------------|
//! | `TimeSourceError` | `TimeSource::get_time` | エラーフラグメントに吸収 |
//! | `TimePointError` | `TimePoint::from_hm` | 呼び出し元に返す |
//!
//! `TimeDisplay` の外に出るエラーはない。

use thiserror::Error;

/// 時刻ソースが時刻を返せなかったことを表すエラー
///
/// 時刻ソースの境界で発生するエラーはこの一種類のみ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSourceError {
    /// 時刻ソースが利用できない
    #[error("時刻ソースが利用できません: {0}")]
    Unavailable(String),
}

/// 時・分の範囲外を表すエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimePointError {
    /// 時が 0〜23 の範囲外
    #[error("時は 0〜23 の範囲である必要があります: {0}")]
    HourOutOfRange(u32),

    /// 分が 0〜59 の範囲外
    #[error("分は 0〜59 の範囲である必要があります: {0}")]
    MinuteOutOfRange(u32),
}

/// `TimeDisplay` 内部でラベル生成が失敗した理由
///
/// すべてエラーフラグメントに吸収されるため、クレート外には公開しない。
#[derive(Debug, Error)]
pub(crate) enum TimeDisplayError {
    /// 時刻ソースが設定される前に呼び出された
    #[error("時刻ソースが設定されていません")]
    NotConfigured,

    /// 時刻ソースが失敗した
    #[error(transparent)]
    Source(#[from] TimeSourceError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unavailableのメッセージに理由が含まれる() {
        let error = TimeSourceError::Unavailable("NTP 応答なし".to_string());

        assert_eq!(error.to_string(), "時刻ソースが利用できません: NTP 応答なし");
    }

    #[test]
    fn test_範囲外エラーのメッセージに値が含まれる() {
        assert_eq!(
            TimePointError::HourOutOfRange(24).to_string(),
            "時は 0〜23 の範囲である必要があります: 24"
        );
        assert_eq!(
            TimePointError::MinuteOutOfRange(60).to_string(),
            "分は 0〜59 の範囲である必要があります: 60"
        );
    }

    #[test]
    fn test_表示エラーは時刻ソースのエラーをそのまま表示する() {
        let error = TimeDisplayError::from(TimeSourceError::Unavailable("停止中".to_string()));

        assert_eq!(error.to_string(), "時刻ソースが利用できません: 停止中");
    }
}
