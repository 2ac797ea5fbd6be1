//! ドメイン型定義
//!
//! プラットフォーム識別子、正規化済みトレンド項目、プローブ結果

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::HotlistError;

/// 対応プラットフォーム
///
/// 設定時点で確定する固定集合。各プラットフォームは上流アグリゲーションAPI
/// 上の固定相対パスを持つ。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// 微博
    Weibo,
    /// 知乎
    Zhihu,
    /// 今日头条
    Toutiao,
    /// 小红书
    Xiaohongshu,
    /// 虎扑
    Hupu,
    /// 百度贴吧
    Tieba,
}

impl Platform {
    /// 全プラットフォーム（ナビゲーション表示順）
    pub const ALL: [Platform; 6] = [
        Platform::Weibo,
        Platform::Zhihu,
        Platform::Toutiao,
        Platform::Xiaohongshu,
        Platform::Hupu,
        Platform::Tieba,
    ];

    /// Platformを識別子文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weibo => "weibo",
            Self::Zhihu => "zhihu",
            Self::Toutiao => "toutiao",
            Self::Xiaohongshu => "xiaohongshu",
            Self::Hupu => "hupu",
            Self::Tieba => "tieba",
        }
    }

    /// 表示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Weibo => "微博",
            Self::Zhihu => "知乎",
            Self::Toutiao => "今日头条",
            Self::Xiaohongshu => "小红书",
            Self::Hupu => "虎扑",
            Self::Tieba => "百度贴吧",
        }
    }

    /// 上流API上の相対パス
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::Weibo => "/v2/weibo",
            Self::Zhihu => "/v2/zhihu",
            Self::Toutiao => "/v2/toutiao",
            Self::Xiaohongshu => "/v2/xiaohongshu",
            Self::Hupu => "/v2/hupu",
            Self::Tieba => "/v2/tieba",
        }
    }
}

impl FromStr for Platform {
    type Err = HotlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weibo" => Ok(Self::Weibo),
            "zhihu" => Ok(Self::Zhihu),
            "toutiao" => Ok(Self::Toutiao),
            "xiaohongshu" => Ok(Self::Xiaohongshu),
            "hupu" => Ok(Self::Hupu),
            "tieba" => Ok(Self::Tieba),
            other => Err(HotlistError::UnknownPlatform(other.to_string())),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 正規化済みトレンド項目
///
/// 上流のレスポンス要素から表示タイトル・外部リンク・位置ベースIDへ正規化した値。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendingItem {
    /// 一覧内の位置（1始まり）
    pub id: u32,
    /// 表示タイトル
    pub title: String,
    /// 外部リンク（任意）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// 単一プローブ試行の結果
///
/// 試行ごとに生成され、以後変更しない。`latency_ms`は到達不能時に`None`
/// （計測不能センチネル）となり、比較上は無限大として扱う。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProbeResult {
    /// 対象インスタンスのベースURL
    pub instance: String,
    /// 到達可能かつレスポンス検証に合格したか
    pub available: bool,
    /// 計測レイテンシ（ミリ秒）
    pub latency_ms: Option<u32>,
}

impl ProbeResult {
    /// 成功結果を生成
    pub fn available(instance: impl Into<String>, latency_ms: u32) -> Self {
        Self {
            instance: instance.into(),
            available: true,
            latency_ms: Some(latency_ms),
        }
    }

    /// 失敗結果を生成
    pub fn unavailable(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            available: false,
            latency_ms: None,
        }
    }

    /// 比較用レイテンシ（到達不能は無限大扱い）
    pub fn latency_for_ordering(&self) -> u32 {
        self.latency_ms.unwrap_or(u32::MAX)
    }
}

/// 直近プローブラウンドにおける1インスタンスの状況スナップショット
#[derive(Debug, Clone, Serialize)]
pub struct InstanceHealth {
    /// 対象インスタンスのベースURL
    pub instance: String,
    /// 到達可能か
    pub available: bool,
    /// 計測レイテンシ（ミリ秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u32>,
    /// チェック時刻
    pub checked_at: DateTime<Utc>,
}

impl InstanceHealth {
    /// プローブ結果からスナップショットを生成
    pub fn from_probe(result: &ProbeResult, checked_at: DateTime<Utc>) -> Self {
        Self {
            instance: result.instance.clone(),
            available: result.available,
            latency_ms: result.latency_ms,
            checked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_roundtrip() {
        for platform in Platform::ALL {
            let parsed: Platform = platform.as_str().parse().unwrap();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn test_platform_unknown() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert!(matches!(err, HotlistError::UnknownPlatform(_)));
    }

    #[test]
    fn test_platform_api_path() {
        assert_eq!(Platform::Weibo.api_path(), "/v2/weibo");
        assert_eq!(Platform::Tieba.api_path(), "/v2/tieba");
    }

    #[test]
    fn test_platform_display_name() {
        assert_eq!(Platform::Weibo.display_name(), "微博");
        assert_eq!(Platform::Toutiao.display_name(), "今日头条");
    }

    #[test]
    fn test_trending_item_serialization_skips_missing_link() {
        let item = TrendingItem {
            id: 1,
            title: "話題".to_string(),
            link: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("link"));
    }

    #[test]
    fn test_probe_result_ordering_sentinel() {
        let ok = ProbeResult::available("http://a.example", 120);
        let down = ProbeResult::unavailable("http://b.example");
        assert_eq!(ok.latency_for_ordering(), 120);
        assert_eq!(down.latency_for_ordering(), u32::MAX);
    }
}
