//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: `get`, `list` and `delete`
//! come for free once a client exposes its inner [`ResourceClient`] and says how
//! framework errors map onto its own error type.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Item> for ItemClient {
///     type Error = ItemError;
///
///     fn inner(&self) -> &ResourceClient<Item> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.into_entity_error::<ItemError>().unwrap_or_else(|e| match e {
///             FrameworkError::NotFound(id) => ItemError::NotFound(id),
///             other => ItemError::ActorCommunicationError(other.to_string()),
///         })
///     }
/// }
///
/// let item = client.get(ItemId(1)).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
