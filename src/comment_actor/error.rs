//! Error types for the Comment actor.

use crate::model::{CommentId, UserId};
use crate::user_actor::UserError;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur during comment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentError {
    /// The requested comment was not found.
    #[error("Comment not found: {0}")]
    NotFound(String),

    #[error("Vendor not found: {0}")]
    VendorNotFound(UserId),

    /// Vendors may not rate themselves.
    #[error("Vendors cannot rate themselves")]
    SelfRating,

    /// Only the commenter may delete a comment.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Comment {0} is already deleted")]
    AlreadyDeleted(CommentId),

    /// Comments are soft-deleted; removing the row would corrupt the vendor's average.
    #[error("Comment {0} cannot be hard-deleted")]
    HardDeleteForbidden(CommentId),

    /// The comment data provided is invalid.
    #[error("Comment validation error: {0}")]
    ValidationError(String),

    /// The user actor rejected the vendor lookup or rating change.
    #[error(transparent)]
    User(#[from] UserError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CommentError {
    fn from(msg: String) -> Self {
        CommentError::ActorCommunicationError(msg)
    }
}

impl From<ValidationErrors> for CommentError {
    fn from(errors: ValidationErrors) -> Self {
        CommentError::ValidationError(errors.to_string())
    }
}
