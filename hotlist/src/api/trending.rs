//! トレンド一覧APIハンドラー

use axum::{
    extract::{Path, State},
    Json,
};

use super::error::AppError;
use super::Envelope;
use crate::common::types::{Platform, TrendingItem};
use crate::AppState;

/// GET /api/trending/:platform - 指定プラットフォームのトレンド一覧
///
/// 上流の失敗は空の`data`として返る（§エラー設計: 部分結果なし、
/// エラーメッセージなし）。未知のプラットフォームのみ404。
pub async fn get_trending(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<Json<Envelope<Vec<TrendingItem>>>, AppError> {
    let platform: Platform = platform.parse()?;
    let items = state.trending.fetch(platform).await;
    Ok(Envelope::ok(items))
}
