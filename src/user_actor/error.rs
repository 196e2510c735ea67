//! Error types for the User actor.

use crate::model::{RatingError, UserId};
use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// Another user already holds this username or email.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// The caller may not perform this operation on this account.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Email already verified for {0}")]
    AlreadyVerified(UserId),

    /// Orders and comments keep referring to their user.
    #[error("User {0} cannot be hard-deleted")]
    HardDeleteForbidden(UserId),

    /// The vendor's rating aggregate rejected the change.
    #[error(transparent)]
    Rating(#[from] RatingError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}

impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        UserError::ValidationError(errors.to_string())
    }
}
