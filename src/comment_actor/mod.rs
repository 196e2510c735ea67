//! Comment-specific resource logic: vendor comments, ratings and soft delete.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CommentClient;
use crate::framework::ResourceActor;
use crate::model::Comment;
use crate::notifications::NotificationDispatcher;

/// Creates a new Comment actor and its client.
///
/// The actor needs a `UserClient` as its context when run.
pub fn new(
    mailbox_capacity: usize,
    notifications: NotificationDispatcher,
) -> (ResourceActor<Comment>, CommentClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    let client = CommentClient::new(generic_client, notifications);

    (actor, client)
}
