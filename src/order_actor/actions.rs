//! Custom actions for the Order actor.

use crate::model::{Order, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order along its status graph.
    ///
    /// Cancelling an order that still holds stock returns that stock to the item.
    Transition(OrderStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// `from` is the status before the transition; `order` carries the new one.
    Transition { from: OrderStatus, order: Order },
}
