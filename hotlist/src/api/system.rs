//! システム情報APIハンドラー

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use super::Envelope;
use crate::AppState;

/// システム情報レスポンス
#[derive(Debug, Serialize)]
pub struct SystemInfo {
    /// サーバーバージョン
    pub version: String,
    /// プロセスID
    pub pid: u32,
    /// 起動からの経過秒数
    pub uptime_secs: i64,
}

/// GET /api/system - サーバー情報
pub async fn get_system(State(state): State<AppState>) -> Json<Envelope<SystemInfo>> {
    Envelope::ok(SystemInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        pid: std::process::id(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}
