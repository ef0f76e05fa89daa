//! インデックス生成
//!
//! ベースフォルダ直下のカテゴリフォルダを走査して `Document` を組み立てる。
//! 設定はすべて `BuildOptions` で受け取り、環境変数は読まない。

use crate::error::{FlashcardError, Result};
use crate::scanner::{self, EntryOrder};
use chrono::{DateTime, Utc};
use flashcard_index_common::{
    image_url, parse_category_name, parse_word_pair, Category, Document, IdStrategy, Item,
    DEFAULT_SITE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OWNER: &str = "sb2chun";

/// 不正な名前を見つけたときの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// 1件でもあれば全体を中断
    #[default]
    Abort,
    /// 記録してスキップ
    Skip,
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub owner: String,
    pub site: String,
    pub order: EntryOrder,
    pub ids: IdStrategy,
    pub on_malformed: MalformedPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.into(),
            site: DEFAULT_SITE.into(),
            order: EntryOrder::default(),
            ids: IdStrategy::default(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

/// スキップされたエントリ
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub document: Document,
    pub skipped: Vec<SkippedEntry>,
}

/// `2026-10-16T03:04:05.123456Z` 形式
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

pub fn build_document(base_dir: &Path, options: &BuildOptions) -> Result<BuildOutcome> {
    build_document_at(base_dir, options, Utc::now())
}

/// 生成日時を指定して組み立てる
pub fn build_document_at(
    base_dir: &Path,
    options: &BuildOptions,
    now: DateTime<Utc>,
) -> Result<BuildOutcome> {
    let mut document = Document::new(format_timestamp(now));
    let mut skipped = Vec::new();

    for entry in scanner::list_entries(base_dir, options.order)? {
        if !scanner::is_valid_directory(&entry.name, entry.is_dir) {
            tracing::debug!(name = %entry.name, "カテゴリ対象外");
            continue;
        }

        let name = match parse_category_name(&entry.name) {
            Ok(name) => name,
            Err(e) => {
                reject(&entry.path, e, options.on_malformed, &mut skipped)?;
                continue;
            }
        };

        let mut category = Category::new(entry.name.as_str(), name.kor, name.eng);

        for image in scanner::list_entries(&entry.path, options.order)? {
            if !scanner::is_valid_image(&image.name, image.is_dir) {
                tracing::debug!(category = %entry.name, name = %image.name, "画像対象外");
                continue;
            }

            let words = match parse_word_pair(&image.name) {
                Ok(words) => words,
                Err(e) => {
                    reject(&image.path, e, options.on_malformed, &mut skipped)?;
                    continue;
                }
            };

            let id = options
                .ids
                .item_id(&category.path, category.items.len(), &words.kor, &words.eng);

            category.items.push(Item {
                id,
                image: image_url(&options.owner, &options.site, &category.path, &image.name),
                kor_word: words.kor,
                eng_word: words.eng,
            });
        }

        // 画像のあるカテゴリのみ追加
        if category.is_empty() {
            tracing::debug!(category = %category.path, "画像がないため除外");
            continue;
        }

        tracing::debug!(
            category = %category.path,
            items = category.items.len(),
            "カテゴリ追加"
        );
        document.categories.push(category);
    }

    Ok(BuildOutcome { document, skipped })
}

fn reject(
    path: &Path,
    error: flashcard_index_common::Error,
    policy: MalformedPolicy,
    skipped: &mut Vec<SkippedEntry>,
) -> Result<()> {
    match policy {
        MalformedPolicy::Abort => Err(FlashcardError::InvalidName {
            path: path.display().to_string(),
            source: error,
        }),
        MalformedPolicy::Skip => {
            tracing::warn!(path = %path.display(), "{}", error);
            skipped.push(SkippedEntry {
                path: path.to_path_buf(),
                reason: error.to_string(),
            });
            Ok(())
        }
    }
}
