//! Error types for FHIR R5 models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("expected a JSON object for the resource")]
    ExpectedObject,

    #[error("missing resourceType property")]
    MissingResourceType,

    #[error("unsupported resource type: {0}")]
    UnknownResourceType(String),

    #[error("unknown code '{code}' for value set {value_set}")]
    UnknownCode {
        value_set: &'static str,
        code: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ferrum_r5_validator::ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
