//! トレンド取得
//!
//! プラットフォーム識別子から固定相対パスを解決し、セレクターが返した
//! ベースURLと連結して実データを取得、正規化済み項目列へ変換する。
//! あらゆる失敗は空リストへ収束し、呼び出し側へエラーは伝播しない。

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::common::error::{HotlistError, HotlistResult};
use crate::common::protocol::{ApiEnvelope, TrendingEntry};
use crate::common::types::{Platform, TrendingItem};
use crate::metrics;
use crate::selector::InstanceSelector;

/// データ取得のタイムアウト（秒）
const FETCH_TIMEOUT_SECS: u64 = 10;

/// トレンド取得クライアント
#[derive(Clone)]
pub struct TrendingClient {
    /// インスタンスセレクター
    selector: Arc<InstanceSelector>,
    /// HTTPクライアント（接続プーリング有効）
    client: Client,
}

impl TrendingClient {
    /// セレクターからクライアントを作成
    pub fn new(selector: Arc<InstanceSelector>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { selector, client }
    }

    /// セレクターへの参照
    pub fn selector(&self) -> &Arc<InstanceSelector> {
        &self.selector
    }

    /// 指定プラットフォームのトレンド一覧を取得
    ///
    /// 決して失敗しない。ネットワーク・パース・検証いずれの失敗でも
    /// 空リストを返し、部分結果は返さない。
    pub async fn fetch(&self, platform: Platform) -> Vec<TrendingItem> {
        let base = self.selector.select().await;
        let url = format!("{}{}", base.trim_end_matches('/'), platform.api_path());

        match self.request_items(&url).await {
            Ok(items) => {
                metrics::record_fetch(platform.as_str(), true);
                debug!(platform = %platform, count = items.len(), "Trending fetch succeeded");
                items
            }
            Err(e) => {
                metrics::record_fetch(platform.as_str(), false);
                warn!(platform = %platform, error = %e, "Trending fetch failed");
                Vec::new()
            }
        }
    }

    /// 取得本体（失敗を型で返す内部関数）
    async fn request_items(&self, url: &str) -> HotlistResult<Vec<TrendingItem>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HotlistError::Http(format!("HTTP {}", status)));
        }

        let envelope: ApiEnvelope<Vec<TrendingEntry>> = response
            .json()
            .await
            .map_err(|e| HotlistError::Upstream(format!("malformed body: {}", e)))?;

        if !envelope.is_ok() {
            return Err(HotlistError::Upstream(format!("code {}", envelope.code)));
        }

        let entries = envelope.data.unwrap_or_default();
        Ok(normalize(entries))
    }
}

/// 上流エントリ列を正規化済み項目列へ変換
///
/// IDは一覧内の位置（1始まり）。
fn normalize(entries: Vec<TrendingEntry>) -> Vec<TrendingItem> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| TrendingItem {
            id: (index + 1) as u32,
            title: entry.title,
            link: entry.link,
        })
        .collect()
}
