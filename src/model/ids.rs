//! Type-safe identifiers.
//!
//! Each resource gets its own newtype so an `ItemId` can never be passed where a
//! `UserId` is expected. Ids are allocated by the owning actor starting at 1 and
//! display with a resource prefix (`user_1`, `item_7`, ...).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a registered user (customer or employee).
    UserId,
    "user"
);
entity_id!(
    /// Identifier of a catalog item.
    ItemId,
    "item"
);
entity_id!(
    /// Identifier of an order.
    OrderId,
    "order"
);
entity_id!(
    /// Identifier of a vendor comment.
    CommentId,
    "comment"
);
entity_id!(
    /// Identifier of a contact-form message.
    ContactId,
    "contact"
);
