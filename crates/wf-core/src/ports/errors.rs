use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("draft storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("draft storage error: {0}")]
    Storage(String),
}
