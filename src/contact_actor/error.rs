//! Error types for the Contact actor.

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Contact validation error: {0}")]
    ValidationError(String),

    #[error("Contact messages cannot be edited")]
    Immutable,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ContactError {
    fn from(msg: String) -> Self {
        ContactError::ActorCommunicationError(msg)
    }
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        ContactError::ValidationError(errors.to_string())
    }
}
