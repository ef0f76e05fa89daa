//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed name `{name}`: expected exactly one `_`, found {parts} part(s)")]
    MalformedName { name: String, parts: usize },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
