//! 上流APIワイヤプロトコル
//!
//! 全ミラーは同一形状のJSONを返す: `{ "code": number, "data": T }`。
//! `code == 200`が成功、それ以外（およびトランスポート失敗）は
//! プラットフォームレベルの失敗として扱う。

use serde::Deserialize;
use serde_json::Value;

/// 上流の成功を示すアプリケーションコード
pub const CODE_OK: i64 = 200;

/// 上流レスポンスの共通エンベロープ
///
/// `data`の欠落・`null`は失敗として扱えるよう`Option`で受ける。
/// 未知フィールドは無視する。
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// アプリケーションレベルのステータスコード
    #[serde(default)]
    pub code: i64,
    /// ペイロード
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// アプリケーションコードが成功を示すか
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}

/// トレンド一覧の1要素（上流形式）
///
/// ミラーによって付加フィールドが異なるため、正規化に必要な最小集合のみ
/// 受け取り、残りは無視する。
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingEntry {
    /// 表示タイトル
    #[serde(default)]
    pub title: String,
    /// 外部リンク
    #[serde(default)]
    pub link: Option<String>,
}

/// ペイロードが空でないか判定
///
/// プローブ検証用。配列・文字列・オブジェクトは要素を持つこと、
/// その他の非nullスカラーは存在すれば十分とみなす。
pub fn payload_is_non_empty(payload: &Value) -> bool {
    match payload {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
