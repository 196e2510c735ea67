//! # Order Client
//!
//! Orchestration (buyer validation, stock reservation) happens in the Order
//! actor's `on_create` hook; this client only sends requests and announces
//! their outcome.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, UserId};
use crate::notifications::{Notification, NotificationDispatcher};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    notifications: NotificationDispatcher,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<OrderError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, notifications: NotificationDispatcher) -> Self {
        Self {
            inner,
            notifications,
        }
    }

    /// Places an order, reserving its stock.
    ///
    /// Fails with [`OrderError::InsufficientStock`] when the item cannot cover
    /// the quantity; no order is created and stock is unchanged.
    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        info!(order = %id, total_price = order.total_price, "Order placed");
        self.notifications.dispatch(Notification::OrderPlaced {
            order: id,
            buyer: order.buyer,
            total_price: order.total_price,
        });
        Ok(order)
    }

    /// The buyer's orders, in the order they were placed.
    #[instrument(skip(self))]
    pub async fn orders_for(&self, buyer: UserId) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|order| order.buyer == buyer)
            .collect())
    }

    /// Moves an order to `status`.
    ///
    /// Re-applying the current status succeeds without changing anything.
    #[instrument(skip(self))]
    pub async fn transition(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        let OrderActionResult::Transition { from, order } = self
            .inner
            .perform_action(id, OrderAction::Transition(status))
            .await
            .map_err(Self::map_error)?;

        if from != order.status {
            info!(order = %id, %from, to = %order.status, "Order status changed");
            self.notifications.dispatch(Notification::OrderStatusChanged {
                order: id,
                from,
                to: order.status,
            });
        }
        Ok(order)
    }
}

macro_rules! status_transitions {
    ($($status:ident),* $(,)?) => {
        paste::paste! {
            impl OrderClient {
                $(
                    #[doc = "Moves the order to [`OrderStatus::" $status "`]."]
                    pub async fn [<mark_ $status:lower>](&self, id: OrderId) -> Result<Order, OrderError> {
                        self.transition(id, OrderStatus::$status).await
                    }
                )*
            }
        }
    };
}

status_transitions!(Confirmed, Shipped, Delivered, Cancelled, Returned, Refunded);
