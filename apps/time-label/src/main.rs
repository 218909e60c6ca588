//! # time-label
//!
//! 現在時刻を HTML フラグメント（`Midnight` / `Noon` / `h:mm a`）として stdout に出力する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TIME_LABEL_CLOCK` | No | `local`（デフォルト）または `utc` |
//! | `TIME_LABEL_FIXED_TIME` | No | `HH:MM`。設定時はこの時刻を表示する |
//! | `LOG_FORMAT` | No | `pretty`（デフォルト）または `json` |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,timelabel=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p timelabel-cli
//!
//! TIME_LABEL_FIXED_TIME=00:01 cargo run -p timelabel-cli
//! # => <span class="tinyBoldText">Midnight</span>
//! ```

use anyhow::Context as _;
use timelabel_cli::{config::LabelConfig, render_label};
use timelabel_shared::observability::{self, TracingConfig};

fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("time-label");
    observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "time-label").entered();

    // 設定読み込み
    let config = LabelConfig::from_env().context("設定の読み込みに失敗しました")?;
    tracing::debug!(
        clock = %config.clock,
        fixed_time = ?config.fixed_time,
        "時刻ソースの設定を読み込みました"
    );

    println!("{}", render_label(&config));

    Ok(())
}
