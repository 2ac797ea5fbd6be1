//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! コア操作（プローブ、インスタンス選択、トレンド取得）は呼び出し側に
//! エラーを返さない設計のため、これらの型は内部レイヤーとREST APIの
//! 境界でのみ使用する。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// hotlist error type
#[derive(Debug, Error)]
pub enum HotlistError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Unknown platform identifier
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Timeout error
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Upstream responded but with a failure payload
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Selection store error
    #[error("Selection store error: {0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HotlistError {
    /// Returns a safe error message for external clients.
    ///
    /// Internal details (mirror hostnames, file paths) stay in server logs;
    /// HTTP responses only carry the generic form.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(_) => "Request error",
            Self::UnknownPlatform(_) => "Unknown platform",
            Self::Http(_) => "Upstream unavailable",
            Self::Timeout(_) => "Request timeout",
            Self::Upstream(_) => "Upstream unavailable",
            Self::Store(_) => "Internal server error",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(_) => StatusCode::BAD_REQUEST,
            Self::UnknownPlatform(_) => StatusCode::NOT_FOUND,
            Self::Http(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for HotlistError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (hotlist)
pub type HotlistResult<T> = Result<T, HotlistError>;
