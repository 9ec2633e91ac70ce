use thiserror::Error;

/// RFC encoding errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    CoreError(#[from] mozvcard_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
