//! # time-label 共有ユーティリティ
//!
//! ビジネスロジックを含まない横断的な機能を配置する。
//!
//! - [`observability`] - トレーシング初期化とログ出力形式

pub mod observability;
