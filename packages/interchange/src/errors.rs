use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterchangeError {
    /// The payload is missing required top-level fields or is not JSON.
    /// Surfaced to the user as a rejected import; nothing is committed.
    #[error("Invalid document format: {0}")]
    Format(String),

    #[error("Could not read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Could not write file: {0}")]
    Write(#[source] std::io::Error),
}

pub type InterchangeResult<T> = Result<T, InterchangeError>;
