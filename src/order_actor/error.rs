//! Error types for the Order actor.

use crate::item_actor::ItemError;
use crate::model::{ItemId, OrderStatus, UserId};
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The item specified in the order does not exist.
    #[error("Invalid item: {0}")]
    InvalidItem(ItemId),

    /// The buyer specified in the order does not exist.
    #[error("Invalid user: {0}")]
    InvalidUser(UserId),

    /// Orders must be for at least one unit.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// There is not enough stock to fulfill the order. Nothing was reserved.
    #[error("Not enough stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        requested: u32,
        available: u32,
    },

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The item actor rejected a stock operation for another reason.
    #[error(transparent)]
    Item(#[from] ItemError),

    /// The user actor failed while looking up the buyer.
    #[error(transparent)]
    User(#[from] UserError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
