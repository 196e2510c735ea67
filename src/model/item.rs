/// Represents an item in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Item`](#impl-ActorEntity-for-Item) for details on:
/// - Creation parameters ([`ItemCreate`])
/// - Update parameters ([`ItemUpdate`])
/// - Custom actions ([`ItemAction`](crate::item_actor::ItemAction))
use crate::model::{ItemId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Decimal places kept for weights (grams precision, in kg).
pub const WEIGHT_SCALE: u32 = 3;

/// Exclusive upper bound on an item's weight in kg (ten significant digits,
/// three of them fractional).
pub const MAX_WEIGHT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub vendor: Option<UserId>,
    pub category: Option<String>,
    pub colors: Vec<String>,
    pub stock: u32,
    /// Price in minor currency units (pence, cents, kobo).
    pub price: u64,
    /// Weight of one unit in kg.
    pub weight: Decimal,
    pub status: ItemStatus,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Item {
    /// Price in major currency units.
    pub fn amount(&self) -> Decimal {
        minor_to_major(self.price)
    }

    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }
}

/// Converts minor currency units into a two-decimal major amount.
pub fn minor_to_major(minor: u64) -> Decimal {
    Decimal::from(minor) / Decimal::ONE_HUNDRED
}

/// Derives a URL slug: lower-case alphanumerics separated by single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Payload for creating a new item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ItemCreate {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    pub vendor: Option<UserId>,
    #[validate(length(max = 255))]
    pub category: Option<String>,
    pub colors: Vec<String>,
    pub stock: u32,
    pub price: u64,
    pub weight: Decimal,
}

impl ItemCreate {
    pub fn new(title: impl Into<String>, price: u64, stock: u32) -> Self {
        Self {
            title: title.into(),
            price,
            stock,
            ..Self::default()
        }
    }
}

/// Payload for updating an item. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ItemUpdate {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub stock: Option<u32>,
    #[validate(length(max = 255))]
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
}

/// Snapshot taken when stock is reserved, used to price the order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockReservation {
    pub item: ItemId,
    pub quantity: u32,
    pub unit_price: u64,
    pub unit_weight: Decimal,
    /// Stock left after the reservation.
    pub remaining: u32,
}
