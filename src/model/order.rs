/// Represents a customer order for a single item.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::{minor_to_major, ItemId, OrderId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
    Refunded,
}

impl OrderStatus {
    /// Whether an order in this status may move to `next`.
    ///
    /// Moving to the current status is always allowed and changes nothing.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        self == next
            || matches!(
                (self, next),
                (Pending, Confirmed)
                    | (Pending, Cancelled)
                    | (Confirmed, Shipped)
                    | (Confirmed, Cancelled)
                    | (Shipped, Delivered)
                    | (Shipped, Returned)
                    | (Delivered, Returned)
                    | (Returned, Refunded)
                    | (Cancelled, Refunded)
            )
    }

    /// Orders in these states still hold the stock they reserved.
    pub fn holds_stock(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
            OrderStatus::Refunded => "refunded",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub buyer: UserId,
    pub item: ItemId,
    pub quantity: u32,
    /// Unit price in minor currency units at the time of ordering.
    pub unit_price: u64,
    /// `unit_price * quantity`, in minor currency units.
    pub total_price: u64,
    /// Total weight in kg.
    pub total_weight: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Total price in major currency units.
    pub fn total_amount(&self) -> Decimal {
        minor_to_major(self.total_price)
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub buyer: UserId,
    pub item: ItemId,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus::*;

    #[test]
    fn forward_transitions_follow_the_fulfilment_path() {
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Shipped));
        assert!(Shipped.can_transition_to(Delivered));
        assert!(Delivered.can_transition_to(Returned));
        assert!(Returned.can_transition_to(Refunded));
        assert!(Cancelled.can_transition_to(Refunded));
    }

    #[test]
    fn backward_and_skipping_transitions_are_rejected() {
        assert!(!Shipped.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Delivered));
        assert!(!Shipped.can_transition_to(Cancelled));
        assert!(!Refunded.can_transition_to(Pending));
        assert!(!Delivered.can_transition_to(Cancelled));
    }

    #[test]
    fn same_status_is_a_no_op() {
        assert!(Delivered.can_transition_to(Delivered));
        assert!(Refunded.can_transition_to(Refunded));
    }

    #[test]
    fn only_open_orders_hold_stock() {
        assert!(Pending.holds_stock());
        assert!(Confirmed.holds_stock());
        assert!(!Shipped.holds_stock());
        assert!(!Cancelled.holds_stock());
    }
}
