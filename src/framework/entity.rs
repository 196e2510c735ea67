//! # ActorEntity Trait
//!
//! The contract every resource (User, Item, Order, Comment, Contact) implements
//! to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Associated types pin each resource to its own payloads: an `Order` actor only
//! accepts `OrderCreate`, an `Item` actor only `ItemCreate`, and so on.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::unique_keys`]: keys that must not collide with any other stored entity.
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can call other actors. The `Context` is injected into
/// every hook at `run()` time ("late binding"), which is how the order actor gets
/// hold of the user and item clients.
///
/// # Staged writes
/// `on_update` and `handle_action` run against a clone of the stored entity. The
/// actor only replaces the stored value when the hook returns `Ok`, so an error
/// returned halfway through a hook leaves the entity untouched.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation; ordering
    /// determines the order of `List` results.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per actor, shared by all of its operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Keys that identify this entity uniquely besides its id (e.g. `email:alice@example.com`).
    ///
    /// The actor rejects a create or update whose keys collide with another stored entity.
    fn unique_keys(&self) -> Vec<String> {
        Vec::new()
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Returning an error aborts the create; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Returning an error vetoes the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
