//! プラットフォーム一覧APIハンドラー

use axum::Json;
use serde::Serialize;

use super::Envelope;
use crate::common::types::Platform;

/// プラットフォーム一覧の1要素
#[derive(Debug, Serialize)]
pub struct PlatformInfo {
    /// 識別子
    pub id: &'static str,
    /// 表示名
    pub name: &'static str,
}

/// GET /api/platforms - 対応プラットフォーム一覧
///
/// フロントエンドのナビゲーション構築用。表示順で返す。
pub async fn list_platforms() -> Json<Envelope<Vec<PlatformInfo>>> {
    let platforms = Platform::ALL
        .iter()
        .map(|p| PlatformInfo {
            id: p.as_str(),
            name: p.display_name(),
        })
        .collect();

    Envelope::ok(platforms)
}
