//! # Storefront
//!
//! > **Order, stock and vendor-rating consistency for a small e-commerce backend.**
//!
//! Users register as buyers, vendors or staff; vendors list items; buyers place
//! orders against item stock and leave rated comments on vendors. Two rules
//! carry the weight:
//!
//! - **Stock is never oversold.** Placing an order reserves its quantity with a
//!   single conditional decrement; an order for more than is left fails with
//!   `InsufficientStock` and changes nothing.
//! - **A vendor's average rating always reflects its active comments.** It is
//!   folded in incrementally when a comment is posted or approved and unwound
//!   when one is soft-deleted or hidden. Removing the last rating resets it to zero.
//!
//! ## Concurrency Model
//!
//! Each resource type is owned by one [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. An actor handles its mailbox sequentially, so
//! every read-modify-write on an item's stock or a vendor's average is serialized
//! without locks. Each request runs against a staged copy of the entity that is
//! committed only when the request succeeds, so failures never leave partial writes.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, and the [`ActorEntity`](framework::ActorEntity) trait.
//! Includes [`framework::mock`] for testing clients without real actors.
//!
//! ### 2. The Data ([`model`])
//! Entities, payloads, ids, [`Rating`](model::Rating) and the
//! [`VendorRating`](model::VendorRating) aggregate.
//!
//! ### 3. The Implementation ([`user_actor`], [`item_actor`], [`order_actor`], [`comment_actor`], [`contact_actor`])
//! `ActorEntity` implementations, actions and errors per resource.
//!
//! ### 4. The Interface ([`clients`])
//! Domain clients such as [`OrderClient`](clients::OrderClient) that hide message passing,
//! recover typed errors, and dispatch [`notifications`] after successful mutations.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) wires the actors together;
//! [`config`] holds its settings.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod comment_actor;
pub mod config;
pub mod contact_actor;
pub mod framework;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod notifications;
pub mod order_actor;
pub mod user_actor;
