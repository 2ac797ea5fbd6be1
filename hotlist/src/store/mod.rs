//! 選択インスタンスの永続化ストア
//!
//! 選択アルゴリズムの勝者を1つの文字列値として保持する。スキーマも
//! 有効期限メタデータも持たない。セレクターには trait として注入し、
//! テストではインメモリ実装に差し替える。

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::common::error::{HotlistError, HotlistResult};

/// 選択インスタンスのキー・バリュー永続化
///
/// 実装は同一ストレージスコープ内のプロセス再起動をまたいで値を保持する
/// こと（インメモリ実装はテスト専用）。書き込み競合は last-writer-wins。
pub trait SelectionStore: Send + Sync {
    /// 保存済みの選択インスタンスを返す
    fn get(&self) -> Option<String>;

    /// 選択インスタンスを保存する
    fn set(&self, instance: &str) -> HotlistResult<()>;

    /// 保存済みの選択を破棄する
    fn clear(&self) -> HotlistResult<()>;
}

/// ファイルベースのストア実装
///
/// 値はファイル内容そのもの（ベースURL文字列）。親ディレクトリは
/// 書き込み時に自動作成する。
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    /// 指定パスのストアを作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ストアファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileSelectionStore {
    fn get(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let value = raw.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn set(&self, instance: &str) -> HotlistResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| HotlistError::Store(format!("{}: {}", parent.display(), e)))?;
            }
        }
        std::fs::write(&self.path, instance)
            .map_err(|e| HotlistError::Store(format!("{}: {}", self.path.display(), e)))
    }

    fn clear(&self) -> HotlistResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HotlistError::Store(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// インメモリのストア実装（テスト用）
#[derive(Default)]
pub struct MemorySelectionStore {
    value: RwLock<Option<String>>,
}

impl MemorySelectionStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 値をプリセットした状態で作成
    pub fn with_value(instance: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(Some(instance.into())),
        }
    }
}

impl SelectionStore for MemorySelectionStore {
    fn get(&self) -> Option<String> {
        self.value.read().expect("selection store lock poisoned").clone()
    }

    fn set(&self, instance: &str) -> HotlistResult<()> {
        *self.value.write().expect("selection store lock poisoned") = Some(instance.to_string());
        Ok(())
    }

    fn clear(&self) -> HotlistResult<()> {
        *self.value.write().expect("selection store lock poisoned") = None;
        Ok(())
    }
}
