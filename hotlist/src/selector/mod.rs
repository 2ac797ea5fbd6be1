//! インスタンスセレクター
//!
//! 構成済みの全ミラーインスタンスに対するプローブを並列起動し、
//! 最小レイテンシの1つを選択、以後の実行がプローブを省略できるよう
//! 選択結果をストアへ永続化する。永続化済みの選択は外部から消去される
//! まで無条件に信頼する。

use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::common::types::{InstanceHealth, ProbeResult};
use crate::config::UpstreamConfig;
use crate::health::InstanceProber;
use crate::metrics;
use crate::store::SelectionStore;

/// インスタンスセレクター
///
/// コールドキャッシュ期間のプローブラウンドは非同期ミューテックスで
/// 直列化する。待機していた呼び出しはガード獲得後にストアを読み直し、
/// 既に確定していれば冗長なラウンドを起動しない。
pub struct InstanceSelector {
    /// 候補インスタンス（優先順、常に非空）
    instances: Vec<String>,
    /// プローバー
    prober: InstanceProber,
    /// 選択永続化ストア
    store: Arc<dyn SelectionStore>,
    /// プローブラウンドの単一実行ガード
    round_guard: Mutex<()>,
    /// 直近ラウンドのスナップショット（診断用）
    last_round: RwLock<Vec<InstanceHealth>>,
}

impl InstanceSelector {
    /// 設定とストアからセレクターを作成
    pub fn new(config: &UpstreamConfig, store: Arc<dyn SelectionStore>) -> Self {
        let prober = InstanceProber::with_timeout(config.probe_timeout);
        Self::with_prober(config, prober, store)
    }

    /// プローバーを差し替えてセレクターを作成
    pub fn with_prober(
        config: &UpstreamConfig,
        prober: InstanceProber,
        store: Arc<dyn SelectionStore>,
    ) -> Self {
        // 空リストでは選択結果を返せないため、組み込み既定へ戻す
        let instances = if config.instances.is_empty() {
            UpstreamConfig::default_instances()
        } else {
            config.instances.clone()
        };

        Self {
            instances,
            prober,
            store,
            round_guard: Mutex::new(()),
            last_round: RwLock::new(Vec::new()),
        }
    }

    /// 構成済みインスタンス一覧
    pub fn instances(&self) -> &[String] {
        &self.instances
    }

    /// 現在永続化されている選択（あれば）
    pub fn selected(&self) -> Option<String> {
        self.store.get()
    }

    /// 最良インスタンスを選択
    ///
    /// 決して失敗せず、必ず構成リストのいずれかのインスタンスを返す。
    /// 永続化済みの選択があればプローブせずそれを返す。
    pub async fn select(&self) -> String {
        if let Some(cached) = self.store.get() {
            debug!(instance = %cached, "Using cached instance");
            return cached;
        }

        let _guard = self.round_guard.lock().await;

        // ガード待機中に別の呼び出しがラウンドを完了している場合がある
        if let Some(cached) = self.store.get() {
            debug!(instance = %cached, "Instance selected while waiting for probe round");
            return cached;
        }

        let results = self.probe_round().await;
        match pick_best(&results) {
            Some(best) => {
                if let Err(e) = self.store.set(&best.instance) {
                    warn!(error = %e, "Failed to persist selected instance");
                }
                info!(
                    instance = %best.instance,
                    latency_ms = ?best.latency_ms,
                    "Selected fastest instance"
                );
                best.instance.clone()
            }
            None => {
                // 全滅時は先頭インスタンスへフォールバック。永続化しない
                // ため、次回の呼び出しでは再度プローブが走り、復旧した
                // ミラーを検出できる。
                warn!("No instance available, falling back to the first configured one");
                self.instances[0].clone()
            }
        }
    }

    /// 永続化済みの選択を破棄して新しいラウンドを実行
    pub async fn refresh(&self) -> String {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear selected instance");
        }
        self.select().await
    }

    /// 直近プローブラウンドのスナップショット
    pub async fn last_round(&self) -> Vec<InstanceHealth> {
        self.last_round.read().await.clone()
    }

    /// 全インスタンスを並列にプローブ
    ///
    /// ラウンドは全プローブの確定をもって完了する。タイムアウトした
    /// プローブは自身の上限時刻に失敗として確定するため、ラウンド全体の
    /// 所要時間は単一プローブのタイムアウトを超えない。
    async fn probe_round(&self) -> Vec<ProbeResult> {
        info!(count = self.instances.len(), "Starting probe round");
        metrics::record_selection_round();

        let probes = self.instances.iter().map(|i| self.prober.probe(i));
        let results = join_all(probes).await;

        let available = results.iter().filter(|r| r.available).count();
        info!(
            available,
            total = results.len(),
            "Probe round completed"
        );

        let checked_at = Utc::now();
        let snapshot = results
            .iter()
            .map(|r| InstanceHealth::from_probe(r, checked_at))
            .collect();
        *self.last_round.write().await = snapshot;

        results
    }
}

/// 到達可能な結果から最小レイテンシの1件を選ぶ
///
/// 左から右へ畳み込み、厳密な改善時のみ入れ替える。同値タイは
/// 入力順（＝構成順）で先のインスタンスが勝つ。
fn pick_best(results: &[ProbeResult]) -> Option<&ProbeResult> {
    results
        .iter()
        .filter(|r| r.available)
        .fold(None, |best: Option<&ProbeResult>, candidate| match best {
            Some(current) if current.latency_for_ordering() <= candidate.latency_for_ordering() => {
                Some(current)
            }
            _ => Some(candidate),
        })
}
