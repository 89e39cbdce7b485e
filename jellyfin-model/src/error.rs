use std::fmt::Display;

use thiserror::Error;

/// Errors produced while converting DTOs to and from their wire forms.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The payload was not valid JSON for the requested type.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The value has a shape that cannot be written as `key=value` pairs.
    #[error("cannot encode as query string: {0}")]
    QueryEncoding(String),

    #[error("unknown {kind} value `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
}

impl serde::ser::Error for ModelError {
    fn custom<T: Display>(msg: T) -> Self {
        ModelError::QueryEncoding(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
