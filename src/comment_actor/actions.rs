//! Custom actions for the Comment actor.

use crate::model::{Comment, VendorRating};

#[derive(Debug, Clone)]
pub enum CommentAction {
    /// Flags the comment as deleted, keeping the row.
    SoftDelete { requested_by: String },
    /// Approves or hides the comment.
    Moderate { approved: bool },
}

/// `rating` is the vendor's aggregate when the action moved the comment in or
/// out of it, `None` when the average was left alone.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentActionResult {
    SoftDelete {
        rating: Option<VendorRating>,
    },
    Moderate {
        comment: Comment,
        rating: Option<VendorRating>,
    },
}
