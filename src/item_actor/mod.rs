//! Item-specific resource logic, including stock management actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ItemClient;
use crate::framework::ResourceActor;
use crate::model::Item;

/// Creates a new Item actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Item>, ItemClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    let client = ItemClient::new(generic_client);

    (actor, client)
}
