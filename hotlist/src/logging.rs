//! ロギング初期化ユーティリティ
//!
//! `HOTLIST_LOG_LEVEL`でフィルタを制御し、`HOTLIST_LOG_DIR`が設定されて
//! いる場合は日次ローテーションのファイル出力を併用する。

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::env_or;

/// ファイル出力ワーカーのガード（プロセス終了までフラッシュを保証）
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// ロギングを初期化する
///
/// 二重初期化はエラーとして返す（テストからの多重呼び出しを想定）。
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(env_or("HOTLIST_LOG_LEVEL", "info"))?;

    let stdout_layer = fmt::layer().with_target(true);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer);

    match std::env::var("HOTLIST_LOG_DIR") {
        Ok(dir) if !dir.is_empty() => {
            let appender = tracing_appender::rolling::daily(&dir, "hotlist.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);

            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
        }
        _ => {
            registry.try_init()?;
        }
    }

    Ok(())
}
