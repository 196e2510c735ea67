//! Pure data structures (entities and DTOs) managed by the resource actors.

pub mod comment;
pub mod contact;
pub mod ids;
pub mod item;
pub mod order;
pub mod page;
pub mod rating;
pub mod user;

pub use comment::*;
pub use contact::*;
pub use ids::*;
pub use item::*;
pub use order::*;
pub use page::*;
pub use rating::*;
pub use user::*;
