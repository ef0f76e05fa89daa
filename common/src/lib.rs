//! Flashcard Index Common Library
//!
//! CLIとフロントエンド向けツールで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod parser;
pub mod url;
pub mod id;

pub use types::{Category, Document, Item};
pub use error::{Error, Result};
pub use parser::{parse_category_name, parse_word_pair, CategoryName, WordPair, IMAGE_SUFFIX};
pub use url::{image_url, DEFAULT_SITE};
pub use id::IdStrategy;
