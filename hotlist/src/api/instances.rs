//! インスタンス診断APIハンドラー

use axum::{extract::State, Json};
use serde::Serialize;

use super::Envelope;
use crate::common::types::InstanceHealth;
use crate::AppState;

/// インスタンス診断スナップショット
#[derive(Debug, Serialize)]
pub struct InstancesSnapshot {
    /// 現在永続化されている選択
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    /// 構成済みインスタンス一覧（優先順）
    pub configured: Vec<String>,
    /// 直近プローブラウンドの結果
    pub last_round: Vec<InstanceHealth>,
}

/// GET /api/instances - インスタンス状況スナップショット
pub async fn list_instances(State(state): State<AppState>) -> Json<Envelope<InstancesSnapshot>> {
    let snapshot = InstancesSnapshot {
        selected: state.selector.selected(),
        configured: state.selector.instances().to_vec(),
        last_round: state.selector.last_round().await,
    };

    Envelope::ok(snapshot)
}

/// リフレッシュ結果
#[derive(Debug, Serialize)]
pub struct RefreshResult {
    /// 新しく選択されたインスタンス
    pub selected: String,
}

/// POST /api/instances/refresh - 選択を破棄して再プローブ
///
/// 永続化済み選択の「外部からの消去」に相当する運用操作。
pub async fn refresh_instances(State(state): State<AppState>) -> Json<Envelope<RefreshResult>> {
    let selected = state.selector.refresh().await;
    Envelope::ok(RefreshResult { selected })
}
