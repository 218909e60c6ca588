//! # time-label CLI
//!
//! 設定に応じた時刻ソースを `TimeDisplay` に差し込み、
//! 現在時刻の HTML フラグメントを 1 行出力する。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - 設定エラーの定義

pub mod config;
pub mod error;

use timelabel_domain::TimeDisplay;

use crate::config::LabelConfig;

/// 設定された時刻ソースから HTML フラグメントを生成する
pub fn render_label(config: &LabelConfig) -> String {
    TimeDisplay::with_time_provider(config.time_source()).current_time_as_html_fragment()
}
