//! Error types for the Item actor.

use crate::model::ItemId;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Not enough stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        requested: u32,
        available: u32,
    },

    /// The provided quantity is invalid (zero).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Inactive items cannot be ordered.
    #[error("Item {0} is not available for sale")]
    Inactive(ItemId),

    /// Returning units would overflow the stock counter.
    #[error("Stock overflow for {0}")]
    StockOverflow(ItemId),

    /// Orders keep referring to their item; deactivate it instead.
    #[error("Item {0} cannot be hard-deleted")]
    HardDeleteForbidden(ItemId),

    /// The item data provided is invalid.
    #[error("Item validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ItemError {
    fn from(msg: String) -> Self {
        ItemError::ActorCommunicationError(msg)
    }
}

impl From<ValidationErrors> for ItemError {
    fn from(errors: ValidationErrors) -> Self {
        ItemError::ValidationError(errors.to_string())
    }
}
