use pop_maker_common::{ApiResult, IntakeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PopMakerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Intake(#[from] IntakeError),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API呼び出しエラー: {}", .0.message)]
    Api(ApiResult),

    #[error("{0}")]
    Ranking(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, PopMakerError>;
