//! インデックスの型定義
//!
//! フロントエンドが読むJSONの形そのもの:
//! - Document: ルート（生成日時 + カテゴリ一覧）
//! - Category: 1フォルダ = 1カテゴリ
//! - Item: 1画像 = 1カード

use serde::{Deserialize, Serialize};

/// 生成されるインデックス全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// 生成日時（ISO-8601, UTC, 末尾 `Z`）
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,

    pub categories: Vec<Category>,
}

impl Document {
    pub fn new(last_updated: impl Into<String>) -> Self {
        Self {
            last_updated: last_updated.into(),
            categories: Vec::new(),
        }
    }

    /// 全カテゴリのカード枚数合計
    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// カテゴリ（`<韓国語>_<英語>` フォルダ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// フォルダ名そのまま
    pub path: String,

    #[serde(rename = "korName")]
    pub kor_name: String,

    #[serde(rename = "engName")]
    pub eng_name: String,

    pub items: Vec<Item>,
}

impl Category {
    pub fn new(
        path: impl Into<String>,
        kor_name: impl Into<String>,
        eng_name: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kor_name: kor_name.into(),
            eng_name: eng_name.into(),
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// カード1枚
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub image: String,
    pub kor_word: String,
    pub eng_word: String,
}
