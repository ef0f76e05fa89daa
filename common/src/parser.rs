//! ファイル名・フォルダ名パーサー
//!
//! `<韓国語>_<英語>` 形式の名前を2つに分割する。
//! `_` がちょうど1つでない名前は `Error::MalformedName` になる。

use crate::error::{Error, Result};

/// カード画像の拡張子（小文字のみ）
pub const IMAGE_SUFFIX: &str = ".png";

const SEPARATOR: char = '_';

/// カテゴリフォルダ名のパース結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName {
    pub kor: String,
    pub eng: String,
}

/// 画像ファイル名のパース結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub kor: String,
    pub eng: String,
}

fn split_pair(name: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = name.split(SEPARATOR).collect();
    match parts.as_slice() {
        [kor, eng] => Ok((kor, eng)),
        _ => Err(Error::MalformedName {
            name: name.to_string(),
            parts: parts.len(),
        }),
    }
}

/// フォルダ名 `과일_fruit` → (`과일`, `fruit`)
pub fn parse_category_name(name: &str) -> Result<CategoryName> {
    let (kor, eng) = split_pair(name)?;
    Ok(CategoryName {
        kor: kor.to_string(),
        eng: eng.to_string(),
    })
}

/// ファイル名 `사과_apple.png` → (`사과`, `apple`)
///
/// 末尾の `.png` を1回だけ取り除いてから分割する。
/// 拡張子がない名前はそのまま分割する。
pub fn parse_word_pair(file_name: &str) -> Result<WordPair> {
    let stem = file_name.strip_suffix(IMAGE_SUFFIX).unwrap_or(file_name);
    let (kor, eng) = split_pair(stem)?;
    Ok(WordPair {
        kor: kor.to_string(),
        eng: eng.to_string(),
    })
}
