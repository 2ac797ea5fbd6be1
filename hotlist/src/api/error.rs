//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::common::error::HotlistError;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub HotlistError);

impl From<HotlistError> for AppError {
    fn from(err: HotlistError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // 内部詳細はログへ。クライアントには汎用メッセージのみを返す。
        let status = self.0.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "API request failed");
        } else {
            tracing::debug!(error = %self.0, "API request rejected");
        }

        let body = Json(json!({
            "code": status.as_u16(),
            "message": self.0.external_message(),
        }));

        (status, body).into_response()
    }
}
