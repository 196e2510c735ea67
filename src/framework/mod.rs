//! Generic actor framework for resource management.
//!
//! Every storefront resource (users, items, orders, comments, contact messages)
//! is served by one [`ResourceActor`] that owns its entities and handles requests
//! strictly in arrival order.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entity store
//! - [`ResourceClient`] - Typed handle used to send requests to an actor
//! - [`ActorClient`] - Shared `get`/`list`/`delete` for the domain clients
//! - [`FrameworkError`] - Plumbing errors, plus boxed entity errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
