use thiserror::Error;

#[derive(Error, Debug)]
pub enum CraftError {
    #[error("無効なインターフェース名です: {0}")]
    InvalidInterface(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("チャネルエラー: {0}")]
    Channel(#[from] std::io::Error),

    #[error("送信エラー: {0}")]
    Transmit(String),
}

pub type CraftResult<T> = Result<T, CraftError>;
