//! hotlist Server
//!
//! 複数コンテンツプラットフォームのトレンド一覧を、ミラー化された
//! 上流アグリゲーションAPI経由で取得・正規化して配信するサーバー。
//! 上流ミラーのプローブと最速インスタンス選択が中核となる。

#![warn(missing_docs)]

/// 共通型定義（エラー、ドメイン型、ワイヤ型）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// ヘルスチェック（インスタンスプローブ）
pub mod health;

/// インスタンス選択
pub mod selector;

/// 選択永続化ストア
pub mod store;

/// トレンド取得
pub mod trending;

/// メトリクス収集・管理
pub mod metrics;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動
pub mod server;

/// Shutdown controller
pub mod shutdown;

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::UpstreamConfig;
use crate::selector::InstanceSelector;
use crate::store::FileSelectionStore;
use crate::trending::TrendingClient;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// トレンド取得クライアント
    pub trending: TrendingClient,
    /// インスタンスセレクター
    pub selector: Arc<InstanceSelector>,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
    /// サーバー起動時刻
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// 設定からアプリケーション状態を構築
    ///
    /// 選択永続化はファイルストアを使用する。
    pub fn new(config: &UpstreamConfig) -> Self {
        let store = Arc::new(FileSelectionStore::new(config.selection_file.clone()));
        let selector = Arc::new(InstanceSelector::new(config, store));
        Self::with_selector(selector)
    }

    /// セレクターを差し替えて構築（テスト用途を含む）
    pub fn with_selector(selector: Arc<InstanceSelector>) -> Self {
        Self {
            trending: TrendingClient::new(selector.clone()),
            selector,
            shutdown: shutdown::ShutdownController::default(),
            started_at: Utc::now(),
        }
    }
}
