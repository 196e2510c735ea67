//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placing an order is orchestrated from the `on_create` hook: the buyer is
//! checked against the user actor and the stock is reserved through the item
//! actor before the order is stored. If the reservation fails nothing is stored.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::clients::{ItemClient, UserClient};
use crate::framework::ActorClient;
use crate::framework::ActorEntity;
use crate::item_actor::ItemError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::warn;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    // Orders only change through status transitions.
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = (UserClient, ItemClient);
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.quantity == 0 {
            return Err(OrderError::InvalidQuantity(0));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            buyer: params.buyer,
            item: params.item,
            quantity: params.quantity,
            unit_price: 0,
            total_price: 0,
            total_weight: Decimal::ZERO,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (users, items) = ctx;

        users
            .get(self.buyer)
            .await?
            .ok_or(OrderError::InvalidUser(self.buyer))?;

        let reservation = items
            .reserve_stock(self.item, self.quantity)
            .await
            .map_err(|e| match e {
                ItemError::InsufficientStock {
                    item,
                    requested,
                    available,
                } => OrderError::InsufficientStock {
                    item,
                    requested,
                    available,
                },
                ItemError::NotFound(_) => OrderError::InvalidItem(self.item),
                other => OrderError::Item(other),
            })?;

        let quantity = self.quantity;
        let totals = reservation
            .unit_price
            .checked_mul(u64::from(quantity))
            .zip(reservation.unit_weight.checked_mul(Decimal::from(quantity)));
        let Some((total_price, total_weight)) = totals else {
            // The stock is already out; put it back before refusing.
            if let Err(e) = items.release_stock(self.item, quantity).await {
                warn!(order = %self.id, error = %e, "Failed to release stock after total overflow");
            }
            return Err(OrderError::ValidationError(format!(
                "totals for {quantity} x {} overflow",
                self.item
            )));
        };

        self.unit_price = reservation.unit_price;
        self.total_price = total_price;
        self.total_weight = total_weight;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        Err(OrderError::ValidationError(
            "orders change only through status transitions".into(),
        ))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &Self::Context,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Transition(next) => {
                let from = self.status;
                if !from.can_transition_to(next) {
                    return Err(OrderError::InvalidTransition { from, to: next });
                }
                if from != next {
                    if next == OrderStatus::Cancelled && from.holds_stock() {
                        let (_, items) = ctx;
                        items.release_stock(self.item, self.quantity).await?;
                    }
                    self.status = next;
                    self.updated_at = Utc::now();
                }
                Ok(OrderActionResult::Transition {
                    from,
                    order: self.clone(),
                })
            }
        }
    }
}
