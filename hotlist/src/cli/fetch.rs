//! fetch サブコマンド
//!
//! 指定プラットフォームのトレンド一覧を取得して表示します。
//! サーバーと同じ選択永続化ファイルを共有します。

use clap::Args;
use std::sync::Arc;

use crate::common::types::Platform;
use crate::config::UpstreamConfig;
use crate::selector::InstanceSelector;
use crate::store::FileSelectionStore;
use crate::trending::TrendingClient;

/// fetch サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Platform identifier (weibo, zhihu, toutiao, xiaohongshu, hupu, tieba)
    pub platform: String,
}

/// トレンド一覧を取得して表示
pub async fn execute(args: &FetchArgs) -> anyhow::Result<()> {
    let platform: Platform = args
        .platform
        .parse()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let config = UpstreamConfig::from_env();
    let store = Arc::new(FileSelectionStore::new(config.selection_file.clone()));
    let selector = Arc::new(InstanceSelector::new(&config, store));
    let client = TrendingClient::new(selector);

    let items = client.fetch(platform).await;
    if items.is_empty() {
        println!("No items for {} (upstream unavailable?)", platform);
        return Ok(());
    }

    println!("{} ({})", platform.display_name(), platform);
    for item in items {
        match &item.link {
            Some(link) => println!("{:>3}. {}  <{}>", item.id, item.title, link),
            None => println!("{:>3}. {}", item.id, item.title),
        }
    }

    Ok(())
}
