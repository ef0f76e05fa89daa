pub mod filter;

use crate::error::{FlashcardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use filter::{is_valid_directory, is_valid_image};

/// フォルダ直下のエントリ1件
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

/// エントリの並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// ファイル名順（デフォルト、実行環境によらず同じ結果）
    #[default]
    Name,
    /// ファイルシステムが返した順のまま
    Filesystem,
}

pub fn list_entries(folder: &Path, order: EntryOrder) -> Result<Vec<Entry>> {
    if !folder.is_dir() {
        return Err(FlashcardError::FolderNotFound(folder.display().to_string()));
    }

    let mut walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1);  // 直下のみ（再帰しない）
    if order == EntryOrder::Name {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %path.display(), "UTF-8でない名前をスキップ");
            continue;
        };

        entries.push(Entry {
            // シンボリックリンクはリンク先で判定
            is_dir: path.is_dir(),
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }

    Ok(entries)
}

impl std::str::FromStr for EntryOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "sorted" => Ok(EntryOrder::Name),
            "filesystem" | "fs" | "listing" => Ok(EntryOrder::Filesystem),
            _ => Err(format!("Unknown order: {}. Use name or filesystem", s)),
        }
    }
}

impl std::fmt::Display for EntryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryOrder::Name => write!(f, "name"),
            EntryOrder::Filesystem => write!(f, "filesystem"),
        }
    }
}
