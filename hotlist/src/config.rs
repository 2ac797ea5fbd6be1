//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! upstream mirror configuration consumed by the prober/selector.

use std::path::PathBuf;
use std::time::Duration;

/// 既定のミラーインスタンス一覧（優先順）
///
/// 起動時に確定する固定リスト。実行時に発見・変更されることはない。
pub const DEFAULT_INSTANCES: [&str; 7] = [
    "https://60api.09cdn.xyz",
    "https://60s.zeabur.app",
    "https://60s.crystelf.top",
    "https://cqxx.site",
    "https://api.yanyua.icu",
    "https://60s.tmini.net",
    "https://60s.7se.cn",
];

/// 既定のプローブタイムアウト（ミリ秒）
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;

/// 既定の選択永続化ファイル
pub const DEFAULT_SELECTION_FILE: &str = "data/selected_instance";

/// Get an environment variable, falling back to a default value.
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type.
///
/// Returns the default when the variable is unset or fails to parse.
pub fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// 上流ミラー設定
///
/// インスタンス一覧の順序は選択アルゴリズムのタイブレークおよび
/// 全滅時フォールバックで意味を持つ。
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// 候補インスタンスのベースURL（優先順）
    pub instances: Vec<String>,
    /// プローブの強制タイムアウト
    pub probe_timeout: Duration,
    /// 選択結果を永続化するファイル
    pub selection_file: PathBuf,
}

impl UpstreamConfig {
    /// 環境変数から設定を読み込む
    ///
    /// - `HOTLIST_INSTANCES` — カンマ区切りのベースURLリスト
    /// - `HOTLIST_PROBE_TIMEOUT_MS` — プローブタイムアウト（ミリ秒）
    /// - `HOTLIST_SELECTION_FILE` — 選択永続化ファイルのパス
    pub fn from_env() -> Self {
        let instances = std::env::var("HOTLIST_INSTANCES")
            .map(|raw| parse_instance_list(&raw))
            .unwrap_or_default();
        let instances = if instances.is_empty() {
            Self::default_instances()
        } else {
            instances
        };

        let timeout_ms = env_parse("HOTLIST_PROBE_TIMEOUT_MS", DEFAULT_PROBE_TIMEOUT_MS);
        let selection_file =
            PathBuf::from(env_or("HOTLIST_SELECTION_FILE", DEFAULT_SELECTION_FILE));

        Self {
            instances,
            probe_timeout: Duration::from_millis(timeout_ms),
            selection_file,
        }
    }

    /// 組み込み既定のインスタンス一覧
    pub fn default_instances() -> Vec<String> {
        DEFAULT_INSTANCES.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            instances: Self::default_instances(),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            selection_file: PathBuf::from(DEFAULT_SELECTION_FILE),
        }
    }
}

/// カンマ区切りのインスタンスリストを解析
fn parse_instance_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
