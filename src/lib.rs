//! フラッシュカード画像フォルダからJSONインデックスを生成する

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;

pub use builder::{build_document, BuildOptions, BuildOutcome, MalformedPolicy};
pub use error::{FlashcardError, Result};
