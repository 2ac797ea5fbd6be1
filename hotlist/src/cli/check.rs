//! check サブコマンド
//!
//! 構成済みの全ミラーインスタンスを1回プローブし、結果を表示します。
//! 永続化済みの選択は変更しません。

use clap::Args;
use futures::future::join_all;

use crate::config::UpstreamConfig;
use crate::health::InstanceProber;

/// check サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {}

/// プローブラウンドを実行して結果を表示
pub async fn execute(_args: &CheckArgs) -> anyhow::Result<()> {
    let config = UpstreamConfig::from_env();
    let prober = InstanceProber::with_timeout(config.probe_timeout);

    println!(
        "Probing {} instances (timeout {} ms)...",
        config.instances.len(),
        config.probe_timeout.as_millis()
    );

    let probes = config.instances.iter().map(|i| prober.probe(i));
    let results = join_all(probes).await;

    for result in &results {
        match result.latency_ms {
            Some(latency_ms) => {
                println!("  ok    {:>6} ms  {}", latency_ms, result.instance);
            }
            None => {
                println!("  down         -  {}", result.instance);
            }
        }
    }

    let available = results.iter().filter(|r| r.available).count();
    println!("{}/{} instances available", available, results.len());

    Ok(())
}
