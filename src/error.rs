use thiserror::Error;

/// Errors from the I/O seam. The normalization core itself never fails;
/// malformed fields degrade to explicit markers instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search endpoint reported failure: {0}")]
    Endpoint(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
