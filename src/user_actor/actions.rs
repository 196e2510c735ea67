//! Custom actions for the User actor.
//!
//! The vendor's running average lives on the [`User`](crate::model::User) and is
//! only ever changed by these actions, inside the user actor.

use crate::model::{Rating, VendorRating};

#[derive(Debug, Clone)]
pub enum UserAction {
    /// Folds a newly active rating into the vendor's average.
    RecordRating(Rating),
    /// Removes a rating that stopped being active (soft-deleted or hidden).
    RevertRating(Rating),
    /// Marks the email address as verified.
    VerifyEmail,
}

/// Results from UserActions.
#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// The vendor's aggregate after a `RecordRating` or `RevertRating`.
    Rating(VendorRating),
    Verified { already_verified: bool },
}
