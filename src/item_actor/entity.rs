//! [`ActorEntity`] implementation for [`Item`], including the stock actions.

use super::actions::{ItemAction, ItemActionResult};
use super::error::ItemError;
use crate::framework::ActorEntity;
use crate::model::{
    slugify, Item, ItemCreate, ItemId, ItemUpdate, StockReservation, MAX_WEIGHT, WEIGHT_SCALE,
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use validator::Validate;

fn derive_slug(title: &str) -> Result<String, ItemError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ItemError::ValidationError(format!(
            "title {title:?} has no letters or digits to build a slug from"
        )));
    }
    Ok(slug)
}

fn check_weight(weight: Decimal) -> Result<(), ItemError> {
    if weight.is_sign_negative() {
        return Err(ItemError::ValidationError(format!("negative weight {weight}")));
    }
    if weight >= MAX_WEIGHT {
        return Err(ItemError::ValidationError(format!(
            "weight {weight} must be below {MAX_WEIGHT} kg"
        )));
    }
    if weight.normalize().scale() > WEIGHT_SCALE {
        return Err(ItemError::ValidationError(format!(
            "weight {weight} has more than {WEIGHT_SCALE} decimal places"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Item {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = ItemActionResult;
    type Context = ();
    type Error = ItemError;

    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, ItemError> {
        let title = params.title.trim().to_string();
        let params = ItemCreate { title, ..params };
        params.validate()?;
        check_weight(params.weight)?;

        let now = Utc::now();
        Ok(Self {
            id,
            slug: derive_slug(&params.title)?,
            title: params.title,
            description: params.description,
            vendor: params.vendor,
            category: params.category,
            colors: params.colors,
            stock: params.stock,
            price: params.price,
            weight: params.weight,
            status: Default::default(),
            created: now,
            modified: now,
        })
    }

    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), ItemError> {
        let update = ItemUpdate {
            title: update.title.map(|t| t.trim().to_string()),
            ..update
        };
        update.validate()?;

        if let Some(title) = update.title {
            self.slug = derive_slug(&title)?;
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.modified = Utc::now();
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), ItemError> {
        Err(ItemError::HardDeleteForbidden(self.id))
    }

    /// Handles custom actions for the Item entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `ReserveStock`: Decrements stock if enough is available and returns a pricing snapshot
    /// - `ReleaseStock`: Returns units to stock
    async fn handle_action(
        &mut self,
        action: ItemAction,
        _ctx: &(),
    ) -> Result<ItemActionResult, ItemError> {
        match action {
            ItemAction::CheckStock => Ok(ItemActionResult::CheckStock(self.stock)),
            ItemAction::ReserveStock(quantity) => {
                if quantity == 0 {
                    return Err(ItemError::InvalidQuantity(quantity));
                }
                if !self.is_active() {
                    return Err(ItemError::Inactive(self.id));
                }
                let remaining =
                    self.stock
                        .checked_sub(quantity)
                        .ok_or(ItemError::InsufficientStock {
                            item: self.id,
                            requested: quantity,
                            available: self.stock,
                        })?;
                self.stock = remaining;
                self.modified = Utc::now();
                Ok(ItemActionResult::ReserveStock(StockReservation {
                    item: self.id,
                    quantity,
                    unit_price: self.price,
                    unit_weight: self.weight,
                    remaining,
                }))
            }
            ItemAction::ReleaseStock(quantity) => {
                if quantity == 0 {
                    return Err(ItemError::InvalidQuantity(quantity));
                }
                self.stock = self
                    .stock
                    .checked_add(quantity)
                    .ok_or(ItemError::StockOverflow(self.id))?;
                self.modified = Utc::now();
                Ok(ItemActionResult::ReleaseStock(self.stock))
            }
        }
    }
}
