//! Custom actions for the Item actor.
//!
//! Stock is only ever changed through these actions. Because the item actor
//! handles one request at a time, `ReserveStock` is a single conditional
//! decrement: the check and the write cannot be interleaved by another order.

use crate::model::StockReservation;

#[derive(Debug, Clone)]
pub enum ItemAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes `quantity` units out of stock.
    ///
    /// # Errors
    /// Fails if the quantity is zero, the item is inactive, or the request
    /// exceeds available stock. Stock is unchanged on failure.
    ReserveStock(u32),
    /// Puts `quantity` previously reserved units back.
    ReleaseStock(u32),
}

/// Results from ItemActions - variants match 1:1 with ItemAction
#[derive(Debug, Clone, PartialEq)]
pub enum ItemActionResult {
    CheckStock(u32),
    ReserveStock(StockReservation),
    /// Stock level after the release.
    ReleaseStock(u32),
}
