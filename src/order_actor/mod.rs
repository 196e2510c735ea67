//! Order-specific resource logic: placement with stock reservation and status transitions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;
use crate::notifications::NotificationDispatcher;

/// Creates a new Order actor and its client.
///
/// The actor needs `(UserClient, ItemClient)` as its context when run.
pub fn new(
    mailbox_capacity: usize,
    notifications: NotificationDispatcher,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    let client = OrderClient::new(generic_client, notifications);

    (actor, client)
}
