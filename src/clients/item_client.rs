//! # Item Client
//!
//! Provides a high-level API for interacting with the `Item` actor.
//! It wraps a `ResourceClient<Item>` and exposes catalog and stock methods.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::item_actor::{ItemAction, ItemActionResult, ItemError};
use crate::model::{Item, ItemCreate, ItemId, ItemUpdate, StockReservation};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<ItemError>().unwrap_or_else(|e| match e {
            FrameworkError::NotFound(id) => ItemError::NotFound(id),
            other => ItemError::ActorCommunicationError(other.to_string()),
        })
    }
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ItemCreate) -> Result<ItemId, ItemError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, ItemError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Items currently for sale, in id order.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(Item::is_active)
            .collect())
    }

    /// Check the current stock level for an item.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ItemId) -> Result<u32, ItemError> {
        match self.action(id, ItemAction::CheckStock).await? {
            ItemActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Atomically take `quantity` units out of stock.
    ///
    /// Returns the price and weight snapshot for the reserved units, or
    /// [`ItemError::InsufficientStock`] with stock left unchanged.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ItemId, quantity: u32) -> Result<StockReservation, ItemError> {
        match self.action(id, ItemAction::ReserveStock(quantity)).await? {
            ItemActionResult::ReserveStock(reservation) => Ok(reservation),
            other => Err(unexpected(other)),
        }
    }

    /// Return previously reserved units. Yields the new stock level.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: ItemId, quantity: u32) -> Result<u32, ItemError> {
        match self.action(id, ItemAction::ReleaseStock(quantity)).await? {
            ItemActionResult::ReleaseStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    async fn action(&self, id: ItemId, action: ItemAction) -> Result<ItemActionResult, ItemError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: ItemActionResult) -> ItemError {
    ItemError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
