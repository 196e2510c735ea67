//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod comment_client;
pub mod contact_client;
pub mod item_client;
pub mod order_client;
pub mod user_client;

pub use comment_client::*;
pub use contact_client::*;
pub use item_client::*;
pub use order_client::*;
pub use user_client::*;
