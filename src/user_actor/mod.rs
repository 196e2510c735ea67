//! User-specific resource logic: registration, profiles and the vendor rating aggregate.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;
use crate::notifications::NotificationDispatcher;

/// Creates a new User actor and its client.
pub fn new(
    mailbox_capacity: usize,
    notifications: NotificationDispatcher,
) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    let client = UserClient::new(generic_client, notifications);

    (actor, client)
}
