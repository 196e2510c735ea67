//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the complexity
//! lives. [`StorefrontSystem`] creates every actor, injects dependencies, and
//! coordinates shutdown.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them at `run(context)`
//! ("late binding"), so the order actor can depend on the user and item actors
//! without circular references during construction:
//!
//! ```rust,ignore
//! impl ActorEntity for Item {
//!     type Context = ();
//! }
//!
//! impl ActorEntity for Order {
//!     type Context = (UserClient, ItemClient);
//! }
//!
//! impl ActorEntity for Comment {
//!     type Context = UserClient;
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sending side of each mailbox
//! 2. **Actors detect closure**: `receiver.recv()` returns `None` after the queued requests
//! 3. **Dependent actors exit first**: dropping their context releases the clients they held
//! 4. **Await completion**: actors, then the notification worker
//!
//! ## Observability
//!
//! See [`tracing`](self::tracing) for [`setup_tracing`].

pub mod storefront_system;
pub mod tracing;

pub use self::storefront_system::*;
pub use self::tracing::*;
