use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data file: {0}")]
    Malformed(#[from] serde_json::Error),
}
