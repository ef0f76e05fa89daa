//! カードID生成
//!
//! - Positional: `<category>-<n>`（フォルダ内の順番, 1始まり）
//! - Content: `<category>-<hash>`（単語ペアのSHA-256先頭12桁）

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const CONTENT_HASH_LEN: usize = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// 並び順ベース。ファイルの追加・削除でずれる
    #[default]
    Positional,
    /// 内容ベース。並び替えてもずれない
    Content,
}

impl IdStrategy {
    /// `position` は挿入前の件数（0始まり）
    pub fn item_id(&self, category: &str, position: usize, kor: &str, eng: &str) -> String {
        match self {
            IdStrategy::Positional => format!("{}-{}", category, position + 1),
            IdStrategy::Content => format!("{}-{}", category, content_hash(kor, eng)),
        }
    }
}

fn content_hash(kor: &str, eng: &str) -> String {
    let normalized = format!("{}_{}", kor.trim(), eng.trim().to_lowercase());
    let digest = Sha256::digest(normalized.as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(CONTENT_HASH_LEN);
    hash
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positional" | "position" | "pos" => Ok(IdStrategy::Positional),
            "content" | "hash" => Ok(IdStrategy::Content),
            _ => Err(format!("Unknown id strategy: {}. Use positional or content", s)),
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Positional => write!(f, "positional"),
            IdStrategy::Content => write!(f, "content"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_is_one_based() {
        let id = IdStrategy::Positional.item_id("과일_fruit", 0, "사과", "apple");
        assert_eq!(id, "과일_fruit-1");
        let id = IdStrategy::Positional.item_id("과일_fruit", 1, "바나나", "banana");
        assert_eq!(id, "과일_fruit-2");
    }

    #[test]
    fn test_content_ignores_position() {
        let a = IdStrategy::Content.item_id("과일_fruit", 0, "사과", "apple");
        let b = IdStrategy::Content.item_id("과일_fruit", 7, "사과", "apple");
        assert_eq!(a, b);
        assert!(a.starts_with("과일_fruit-"));
        assert_eq!(a.len(), "과일_fruit-".len() + CONTENT_HASH_LEN);
    }

    #[test]
    fn test_content_normalizes_words() {
        let a = IdStrategy::Content.item_id("c", 0, " 사과", "Apple ");
        let b = IdStrategy::Content.item_id("c", 0, "사과", "apple");
        assert_eq!(a, b);
    }

    #[test]
    fn test_content_differs_by_word() {
        let a = IdStrategy::Content.item_id("c", 0, "사과", "apple");
        let b = IdStrategy::Content.item_id("c", 0, "바나나", "banana");
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("positional".parse::<IdStrategy>().unwrap(), IdStrategy::Positional);
        assert_eq!("CONTENT".parse::<IdStrategy>().unwrap(), IdStrategy::Content);
        assert!("random".parse::<IdStrategy>().is_err());
    }
}
