//! インスタンスプローバー
//!
//! 候補インスタンス1つに対して境界時間付きのヘルスチェックを行い、
//! 到達可否と計測レイテンシを報告する。すべての失敗モード
//! （トランスポート障害、非成功ステータス、不正なボディ、タイムアウト）は
//! 到達不能の結果へ収束し、呼び出し側へは決して伝播しない。

use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::common::error::{HotlistError, HotlistResult};
use crate::common::protocol::{payload_is_non_empty, ApiEnvelope};
use crate::common::types::ProbeResult;
use crate::metrics;

/// プローブのタイムアウト（ミリ秒）
const PROBE_TIMEOUT_MS: u64 = 5_000;

/// 全インスタンス共通のプローブパス
///
/// 対象プラットフォームに関係なく、死活確認にはこの固定ルートを使う。
const PROBE_PATH: &str = "/v2/weibo";

/// インスタンスプローバー
///
/// GET {base}/v2/weibo を発行し、エンベロープの`code == 200`かつ
/// ペイロード非空を検証する。タイムアウトはHTTPクライアントに設定し、
/// 経過時に進行中のリクエストを中断する。
#[derive(Clone)]
pub struct InstanceProber {
    /// HTTPクライアント（タイムアウト設定済み）
    client: Client,
    /// プローブタイムアウト
    timeout: Duration,
}

impl Default for InstanceProber {
    fn default() -> Self {
        Self::new()
    }
}

impl InstanceProber {
    /// 既定タイムアウトのプローバーを作成
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_millis(PROBE_TIMEOUT_MS))
    }

    /// タイムアウトを指定してプローバーを作成
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, timeout }
    }

    /// 設定されたプローブタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 単一インスタンスのプローブ
    ///
    /// 決して失敗しない。1回のプローブ内でのリトライは行わない。
    pub async fn probe(&self, instance: &str) -> ProbeResult {
        let url = format!("{}{}", instance.trim_end_matches('/'), PROBE_PATH);
        let start = Instant::now();

        match self.check(&url).await {
            Ok(()) => {
                let latency_ms = start.elapsed().as_millis() as u32;
                metrics::record_probe(instance, true);
                debug!(instance = %instance, latency_ms, "Probe succeeded");
                ProbeResult::available(instance, latency_ms)
            }
            Err(e) => {
                metrics::record_probe(instance, false);
                debug!(instance = %instance, error = %e, "Probe failed");
                ProbeResult::unavailable(instance)
            }
        }
    }

    /// プローブ本体（失敗を型で返す内部関数）
    async fn check(&self, url: &str) -> HotlistResult<()> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HotlistError::Http(format!("HTTP {}", status)));
        }

        let envelope: ApiEnvelope<Value> = response
            .json()
            .await
            .map_err(|e| HotlistError::Upstream(format!("malformed body: {}", e)))?;

        if !envelope.is_ok() {
            return Err(HotlistError::Upstream(format!("code {}", envelope.code)));
        }

        match envelope.data {
            Some(ref payload) if payload_is_non_empty(payload) => Ok(()),
            _ => Err(HotlistError::Upstream("empty payload".to_string())),
        }
    }
}
