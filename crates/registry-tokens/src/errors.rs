use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    #[error("JWT encoding error: {0}")]
    JwtEncodingError(#[from] jsonwebtoken::errors::Error),
}

pub type Result<T> = std::result::Result<T, TokenError>;
