//! REST APIハンドラー
//!
//! フロントエンド向けのJSONエンドポイント群。レスポンスは上流と同じ
//! `{ code, data }` エンベロープ形状で返す。

pub mod error;
pub mod instances;
pub mod platforms;
pub mod system;
pub mod trending;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// APIレスポンスの共通エンベロープ
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    /// アプリケーションレベルのステータスコード
    pub code: i64,
    /// ペイロード
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 成功レスポンスを生成
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { code: 200, data })
    }
}

/// アプリケーションのルーターを構築
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/platforms", get(platforms::list_platforms))
        .route("/api/trending/:platform", get(trending::get_trending))
        .route("/api/instances", get(instances::list_instances))
        .route("/api/instances/refresh", post(instances::refresh_instances))
        .route("/api/system", get(system::get_system))
        .route("/metrics", get(metrics_text))
        .layer(TraceLayer::new_for_http())
        // フロントエンドは別オリジンのSPAとして配信される
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /metrics - prometheusテキスト形式
async fn metrics_text() -> String {
    crate::metrics::render()
}
