use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("invalid sheets url: {0}")]
    Url(String),
    #[error("sheets request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sheets api responded {status}: {message}")]
    Api { status: u16, message: String },
    #[error("authorization failed: {0}")]
    Auth(String),
}
