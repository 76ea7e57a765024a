use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not ready: {0}")]
    NotReady(String),
    #[error("spreadsheet unavailable: {0}")]
    Upstream(anyhow::Error),
}
