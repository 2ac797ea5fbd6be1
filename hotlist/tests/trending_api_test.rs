//! トレンド取得とREST APIの統合テスト
//!
//! 正規化の正確さ、失敗時の空リスト収束、HTTPエンドポイントの
//! レスポンス形状を検証する。

mod support;

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hotlist::common::types::Platform;
use hotlist::store::MemorySelectionStore;
use hotlist::trending::TrendingClient;
use hotlist::AppState;
use support::{spawn_app, test_selector};

/// モックインスタンスを選択済みとするクライアントを生成
fn client_for(instance: String) -> TrendingClient {
    let store = Arc::new(MemorySelectionStore::with_value(instance.clone()));
    TrendingClient::new(test_selector(vec![instance], store))
}

/// 上流エントリが位置ベースIDつきの項目へ正規化される
#[tokio::test]
async fn fetch_normalizes_items() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/weibo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [
                {"title": "t1", "link": "l1"},
                {"title": "t2"}
            ]
        })))
        .mount(&mock)
        .await;

    let client = client_for(mock.uri());
    let items = client.fetch(Platform::Weibo).await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].title, "t1");
    assert_eq!(items[0].link.as_deref(), Some("l1"));
    assert_eq!(items[1].id, 2);
    assert_eq!(items[1].title, "t2");
    assert_eq!(items[1].link, None);
}

/// プラットフォームごとの相対パスが使われる
#[tokio::test]
async fn fetch_resolves_platform_path() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/zhihu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [{"title": "知乎话题"}]
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let client = client_for(mock.uri());
    let items = client.fetch(Platform::Zhihu).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "知乎话题");
}

/// アプリケーションレベルの失敗コードは空リストへ収束する
#[tokio::test]
async fn fetch_returns_empty_on_application_error() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/weibo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 500})))
        .mount(&mock)
        .await;

    let client = client_for(mock.uri());
    assert!(client.fetch(Platform::Weibo).await.is_empty());
}

/// トランスポート失敗は空リストへ収束する
#[tokio::test]
async fn fetch_returns_empty_on_transport_error() {
    let client = client_for("http://127.0.0.1:9".to_string());
    assert!(client.fetch(Platform::Weibo).await.is_empty());
}

/// 不正なボディは空リストへ収束する
#[tokio::test]
async fn fetch_returns_empty_on_malformed_body() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/weibo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("oops"))
        .mount(&mock)
        .await;

    let client = client_for(mock.uri());
    assert!(client.fetch(Platform::Weibo).await.is_empty());
}

/// アプリケーション状態をモック上流つきで生成
fn app_state_for(instance: String) -> AppState {
    let store = Arc::new(MemorySelectionStore::with_value(instance.clone()));
    AppState::with_selector(test_selector(vec![instance], store))
}

/// GET /api/trending/:platform はエンベロープ形式で一覧を返す
#[tokio::test]
async fn trending_endpoint_returns_envelope() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/weibo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [{"title": "t1", "link": "l1"}]
        })))
        .mount(&mock)
        .await;

    let server = spawn_app(app_state_for(mock.uri())).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/trending/weibo", server.addr()))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][0]["title"], "t1");
    assert_eq!(body["data"][0]["link"], "l1");

    server.stop().await;
}

/// 未知のプラットフォームは404
#[tokio::test]
async fn trending_endpoint_rejects_unknown_platform() {
    let server = spawn_app(app_state_for("http://127.0.0.1:9".to_string())).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/trending/myspace", server.addr()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    server.stop().await;
}

/// GET /api/platforms は全プラットフォームを表示順で返す
#[tokio::test]
async fn platforms_endpoint_lists_all() {
    let server = spawn_app(app_state_for("http://127.0.0.1:9".to_string())).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/platforms", server.addr()))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();

    let platforms = body["data"].as_array().unwrap();
    assert_eq!(platforms.len(), 6);
    assert_eq!(platforms[0]["id"], "weibo");
    assert_eq!(platforms[0]["name"], "微博");

    server.stop().await;
}

/// GET /api/instances は選択状態と構成一覧を返す
#[tokio::test]
async fn instances_endpoint_reports_snapshot() {
    let mock = MockServer::start().await;
    let server = spawn_app(app_state_for(mock.uri())).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/instances", server.addr()))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["data"]["selected"], mock.uri());
    assert_eq!(body["data"]["configured"][0], mock.uri());
    // まだプローブラウンドは走っていない
    assert_eq!(body["data"]["last_round"].as_array().unwrap().len(), 0);

    server.stop().await;
}

/// POST /api/instances/refresh は選択を破棄して再プローブする
#[tokio::test]
async fn refresh_endpoint_triggers_new_round() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/weibo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [{"title": "t1"}]
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let server = spawn_app(app_state_for(mock.uri())).await;
    let client = Client::new();

    let response = client
        .post(format!("http://{}/api/instances/refresh", server.addr()))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["data"]["selected"], mock.uri());

    server.stop().await;
}

/// GET /api/system はバージョン情報を返す
#[tokio::test]
async fn system_endpoint_reports_version() {
    let server = spawn_app(app_state_for("http://127.0.0.1:9".to_string())).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/api/system", server.addr()))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["data"]["uptime_secs"].as_i64().unwrap() >= 0);

    server.stop().await;
}

/// GET /metrics はprometheusテキストを返す
#[tokio::test]
async fn metrics_endpoint_exposes_counters() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/weibo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [{"title": "t1"}]
        })))
        .mount(&mock)
        .await;

    let state = app_state_for(mock.uri());
    // カウンタを動かしてから確認する
    state.trending.fetch(Platform::Weibo).await;

    let server = spawn_app(state).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{}/metrics", server.addr()))
        .send()
        .await
        .unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("hotlist_fetch_total"));

    server.stop().await;
}
