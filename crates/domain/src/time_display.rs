//! # 時刻表示
//!
//! 注入された [`TimeSource`] から現在時刻を読み取り、HTML フラグメントに整形する。
//!
//! ## 出力一覧
//!
//! | 条件 | 出力 |
//! |------|------|
//! | 0 時 0〜1 分 | `<span class="tinyBoldText">Midnight</span>` |
//! | 12 時 0 分 | `<span class="tinyBoldText">Noon</span>` |
//! | それ以外 | `<span class="tinyBoldText">{h}:{mm} {AM/PM}</span>` |
//! | 時刻ソースの失敗 | `<span class="error">Invalid Time</span>` |
//!
//! ## 0 時 1 分の扱い
//!
//! 0 時 1 分も `Midnight` と表示する。時計のずれを許容する意図と思われるが
//! 単なる off-by-one の可能性もあり、プロダクトオーナーの確認待ち。
//! 確認が取れるまでは観測可能な振る舞いを変えない。

use std::{fmt, sync::Arc};

use crate::{TimePoint, TimeSource, error::TimeDisplayError};

/// 時刻ソースが失敗したときに返すフラグメント
pub const INVALID_TIME_FRAGMENT: &str = r#"<span class="error">Invalid Time</span>"#;

const LABEL_OPEN: &str = r#"<span class="tinyBoldText">"#;
const LABEL_CLOSE: &str = "</span>";

/// 読み取り値の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLabel {
    /// 0 時 0 分または 0 時 1 分
    Midnight,
    /// 12 時 0 分
    Noon,
    /// それ以外（12 時間制で表示）
    Clock(TimePoint),
}

impl TimeLabel {
    /// 読み取り値を分類する
    pub fn classify(time: &TimePoint) -> Self {
        match (time.hour(), time.minute()) {
            (0, 0 | 1) => Self::Midnight,
            (12, 0) => Self::Noon,
            _ => Self::Clock(*time),
        }
    }

    /// `tinyBoldText` の span で包んだ HTML フラグメントを返す
    pub fn to_html_fragment(self) -> String {
        format!("{LABEL_OPEN}{self}{LABEL_CLOSE}")
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Midnight => f.write_str("Midnight"),
            Self::Noon => f.write_str("Noon"),
            Self::Clock(time) => f.write_str(&time.to_clock_string()),
        }
    }
}

/// 現在時刻を HTML フラグメントとして表示するコンポーネント
///
/// 保持する状態は注入された時刻ソースへの参照のみ。
/// 再設定は `&mut self` を要求するため、同時変更への対策は持たない。
#[derive(Clone, Default)]
pub struct TimeDisplay {
    time_provider: Option<Arc<dyn TimeSource>>,
}

impl TimeDisplay {
    /// 時刻ソース未設定の状態で作成する
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_provider(time_provider: Arc<dyn TimeSource>) -> Self {
        Self {
            time_provider: Some(time_provider),
        }
    }

    /// 時刻ソースを設定する。設定済みの場合は置き換える。
    pub fn set_time_provider(&mut self, time_provider: Arc<dyn TimeSource>) {
        self.time_provider = Some(time_provider);
    }

    /// 現在時刻を HTML フラグメントとして返す
    ///
    /// 時刻ソースの失敗はすべて [`INVALID_TIME_FRAGMENT`] に吸収し、
    /// 呼び出し元にエラーを返すことはない。
    /// 時刻ソース未設定での呼び出しは呼び出し側の誤りだが、同様に吸収する。
    pub fn current_time_as_html_fragment(&self) -> String {
        match self.current_label() {
            Ok(label) => label.to_html_fragment(),
            Err(e) => {
                tracing::warn!(error = %e, "時刻を取得できないため、エラー表示に切り替えます");
                INVALID_TIME_FRAGMENT.to_string()
            }
        }
    }

    fn current_label(&self) -> Result<TimeLabel, TimeDisplayError> {
        let time_provider = self
            .time_provider
            .as_ref()
            .ok_or(TimeDisplayError::NotConfigured)?;
        let time = time_provider.get_time()?;

        Ok(TimeLabel::classify(&time))
    }
}

impl fmt::Debug for TimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeDisplay")
            .field("configured", &self.time_provider.is_some())
            .finish()
    }
}
