//! 統合テスト用ユーティリティ

use std::{io, net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use hotlist::config::UpstreamConfig;
use hotlist::selector::InstanceSelector;
use hotlist::store::SelectionStore;
use hotlist::AppState;

/// テスト用の上流設定を生成
///
/// プローブタイムアウトはテストが遅延モックを使っても速く終わる値に短縮。
#[allow(dead_code)]
pub fn test_config(instances: Vec<String>) -> UpstreamConfig {
    UpstreamConfig {
        instances,
        probe_timeout: Duration::from_secs(2),
        // セレクターにはストアを直接注入するため未使用
        selection_file: PathBuf::from("unused-in-tests"),
    }
}

/// ストアを注入したセレクターを生成
#[allow(dead_code)]
pub fn test_selector(
    instances: Vec<String>,
    store: Arc<dyn SelectionStore>,
) -> Arc<InstanceSelector> {
    Arc::new(InstanceSelector::new(&test_config(instances), store))
}

/// テスト用のHTTPサーバーを起動するためのユーティリティ
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}

/// アプリケーションをエフェメラルポートで起動
#[allow(dead_code)]
pub async fn spawn_app(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read local addr");

    let app = hotlist::api::create_app(state);
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await
    });

    TestServer {
        addr,
        shutdown: Some(tx),
        handle,
    }
}
