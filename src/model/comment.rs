/// Represents a comment and rating left on a vendor.
///
/// Comments are never physically removed: deleting one sets `deleted` and keeps
/// the row, so the vendor's running average can be unwound exactly. Every read
/// path filters through [`Comment::is_active`].
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
use crate::model::{CommentId, ItemId, Rating, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub vendor: UserId,
    pub item: Option<ItemId>,
    /// Commenter's name.
    pub name: String,
    /// Commenter's email; only its owner may delete the comment.
    pub email: String,
    pub comment: Option<String>,
    pub rating: Rating,
    pub approved: bool,
    pub deleted: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Comment {
    /// Active comments are the ones counted in the vendor's average.
    pub fn is_active(&self) -> bool {
        self.approved && !self.deleted
    }

    pub fn is_written_by(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }
}

/// Payload for posting a comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentCreate {
    pub vendor: UserId,
    pub item: Option<ItemId>,
    #[validate(length(min = 1, max = 250))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub comment: Option<String>,
    pub rating: Rating,
}

/// Payload for editing the text of a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEdit {
    pub comment: Option<String>,
}
