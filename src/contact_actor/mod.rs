//! Contact-form messages. Submitted once, then read by admins; never edited.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ContactClient;
use crate::framework::ResourceActor;
use crate::model::Contact;
use crate::notifications::NotificationDispatcher;

/// Creates a new Contact actor and its client.
pub fn new(
    mailbox_capacity: usize,
    notifications: NotificationDispatcher,
) -> (ResourceActor<Contact>, ContactClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    let client = ContactClient::new(generic_client, notifications);

    (actor, client)
}
