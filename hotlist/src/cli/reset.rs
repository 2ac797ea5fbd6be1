//! reset サブコマンド
//!
//! 永続化済みのインスタンス選択を破棄します。次回のデータ取得時に
//! 新しいプローブラウンドが実行されます。

use clap::Args;

use crate::config::UpstreamConfig;
use crate::store::{FileSelectionStore, SelectionStore};

/// reset サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ResetArgs {}

/// 永続化済み選択を破棄
pub fn execute(_args: &ResetArgs) -> anyhow::Result<()> {
    let config = UpstreamConfig::from_env();
    let store = FileSelectionStore::new(config.selection_file.clone());

    match store.get() {
        Some(instance) => {
            store.clear()?;
            println!("Cleared persisted selection: {}", instance);
        }
        None => {
            println!("No persisted selection to clear");
        }
    }

    Ok(())
}
