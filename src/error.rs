use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("出力先フォルダが存在しません: {0}")]
    OutputDirMissing(String),

    #[error("不正な名前 ({path}): {source}")]
    InvalidName {
        path: String,
        #[source]
        source: flashcard_index_common::Error,
    },

    #[error("フォルダ走査エラー: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
