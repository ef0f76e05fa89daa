//! JSON出力とサマリー表示

use crate::error::{FlashcardError, Result};
use flashcard_index_common::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 既定の出力先（ベースフォルダからの相対パス）
pub const DEFAULT_OUTPUT: &str = "dist/flashcards.json";

/// インデックスを書き出す
///
/// 2スペースインデント、非ASCIIはエスケープしない。
/// `create_dirs` が false なら出力先フォルダは既に存在している必要がある。
pub fn write_document(document: &Document, path: &Path, create_dirs: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if create_dirs {
            std::fs::create_dir_all(parent)?;
        } else if !parent.is_dir() {
            return Err(FlashcardError::OutputDirMissing(parent.display().to_string()));
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;
    Ok(())
}

/// 生成結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output_path: PathBuf,
    pub categories: usize,
    pub items: usize,
}

impl Summary {
    pub fn of(document: &Document, output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            categories: document.categories.len(),
            items: document.total_items(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "JSON file generated at: {}", self.output_path.display())?;
        writeln!(f, "Total categories: {}", self.categories)?;
        write!(f, "Total items: {}", self.items)
    }
}
