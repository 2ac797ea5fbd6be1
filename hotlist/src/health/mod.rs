//! インスタンス死活監視
//!
//! 単一ミラーインスタンスに対する境界時間付きプローブを提供する。
//! プローブは選択ラウンド（selectorモジュール）から並列に起動される。

pub mod prober;

pub use prober::InstanceProber;
