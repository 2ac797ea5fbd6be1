//! メトリクス収集・管理
//!
//! prometheusのデフォルトレジストリにカウンタを登録し、
//! `GET /metrics` でテキスト形式を公開する。

use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

/// プローブ試行数（インスタンス・結果別）
static PROBE_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "hotlist_probe_total",
        "Number of instance probes by outcome",
        &["instance", "outcome"]
    )
    .expect("Failed to register hotlist_probe_total")
});

/// トレンド取得数（プラットフォーム・結果別）
static FETCH_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "hotlist_fetch_total",
        "Number of trending fetches by outcome",
        &["platform", "outcome"]
    )
    .expect("Failed to register hotlist_fetch_total")
});

/// 実行された選択ラウンド数
static SELECTION_ROUNDS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "hotlist_selection_rounds_total",
        "Number of cold-cache probing rounds executed"
    )
    .expect("Failed to register hotlist_selection_rounds_total")
});

fn outcome_label(success: bool) -> &'static str {
    if success {
        "success"
    } else {
        "failure"
    }
}

/// プローブ結果を記録
pub fn record_probe(instance: &str, success: bool) {
    PROBE_TOTAL
        .with_label_values(&[instance, outcome_label(success)])
        .inc();
}

/// トレンド取得結果を記録
pub fn record_fetch(platform: &str, success: bool) {
    FETCH_TOTAL
        .with_label_values(&[platform, outcome_label(success)])
        .inc();
}

/// 選択ラウンドの実行を記録
pub fn record_selection_round() {
    SELECTION_ROUNDS_TOTAL.inc();
}

/// デフォルトレジストリの内容をテキスト形式で出力
pub fn render() -> String {
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
