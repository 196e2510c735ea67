//! Vendor ratings and their running average.
//!
//! A vendor's average is never recomputed from the full comment history. Each
//! active rating is folded in (or out) incrementally:
//!
//! ```text
//! record: new_avg = (old_avg * (N - 1) + r) / N       N counts the new rating
//! revert: new_avg = (old_avg * N - r) / (N - 1)       N counts the removed rating
//! ```
//!
//! Results are rounded to two decimal places, half away from zero. Removing the
//! last rating resets the average to zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error;

/// Decimal places kept for ratings and averages.
pub const RATING_SCALE: u32 = 2;

fn min_rating() -> Decimal {
    Decimal::ONE
}

fn max_rating() -> Decimal {
    Decimal::new(5, 0)
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RatingError {
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(Decimal),

    #[error("Rating may have at most 2 decimal places, got {0}")]
    TooPrecise(Decimal),

    #[error("Vendor has no active ratings to remove")]
    NoRatings,
}

/// A single validated rating in `[1, 5]` with at most two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Builds a whole-star rating.
    pub fn from_integer(stars: i64) -> Result<Self, RatingError> {
        Self::try_from(Decimal::from(stars))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value < min_rating() || value > max_rating() {
            return Err(RatingError::OutOfRange(value));
        }
        if value.normalize().scale() > RATING_SCALE {
            return Err(RatingError::TooPrecise(value));
        }
        Ok(Self(value))
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregation state cached on the vendor: the rounded average and the number
/// of active ratings it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRating {
    pub average: Decimal,
    pub count: u32,
}

impl Default for VendorRating {
    fn default() -> Self {
        Self {
            average: Decimal::ZERO,
            count: 0,
        }
    }
}

impl VendorRating {
    /// Folds a newly active rating into the average.
    pub fn record(&mut self, rating: Rating) -> VendorRating {
        let count = self.count.saturating_add(1);
        let n = Decimal::from(count);
        let sum = self.average * (n - Decimal::ONE) + rating.value();

        self.average = settle(sum / n);
        self.count = count;
        *self
    }

    /// Removes a previously recorded rating from the average.
    pub fn revert(&mut self, rating: Rating) -> Result<VendorRating, RatingError> {
        match self.count {
            0 => Err(RatingError::NoRatings),
            1 => {
                *self = Self::default();
                Ok(*self)
            }
            count => {
                let n = Decimal::from(count);
                let sum = self.average * n - rating.value();

                self.average = settle(sum / (n - Decimal::ONE));
                self.count = count - 1;
                Ok(*self)
            }
        }
    }
}

// Rounding drift can push a recomputed average slightly past the rating bounds.
fn settle(average: Decimal) -> Decimal {
    average
        .round_dp_with_strategy(RATING_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .clamp(min_rating(), max_rating())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stars(n: i64) -> Rating {
        Rating::from_integer(n).unwrap()
    }

    #[test]
    fn rejects_values_outside_the_scale() {
        assert_eq!(Rating::try_from(dec!(0.99)), Err(RatingError::OutOfRange(dec!(0.99))));
        assert_eq!(Rating::try_from(dec!(5.01)), Err(RatingError::OutOfRange(dec!(5.01))));
        assert_eq!(Rating::try_from(dec!(4.125)), Err(RatingError::TooPrecise(dec!(4.125))));
        // Trailing zeros are not extra precision.
        assert_eq!(Rating::try_from(dec!(4.500)).unwrap().value(), dec!(4.5));
        assert!(Rating::from_integer(0).is_err());
    }

    #[test]
    fn sequential_ratings_average_out() {
        let mut vendor = VendorRating::default();
        vendor.record(stars(4));
        vendor.record(stars(5));
        let after = vendor.record(stars(3));

        assert_eq!(after.average, dec!(4.00));
        assert_eq!(after.count, 3);
    }

    #[test]
    fn revert_undoes_record() {
        let mut vendor = VendorRating::default();
        vendor.record(stars(4));
        vendor.record(stars(3));
        let before = vendor;

        vendor.record(stars(5));
        assert_eq!(vendor.average, dec!(4.00));

        let after = vendor.revert(stars(5)).unwrap();
        assert_eq!(after, before);
        assert_eq!(after.average, dec!(3.50));
    }

    #[test]
    fn averages_round_half_away_from_zero() {
        let mut vendor = VendorRating::default();
        vendor.record(stars(1));
        vendor.record(stars(2));
        assert_eq!(vendor.record(stars(2)).average, dec!(1.67));

        let mut halves = VendorRating::default();
        halves.record(Rating::try_from(dec!(4.25)).unwrap());
        // (4.25 + 4.00) / 2 = 4.125
        assert_eq!(halves.record(stars(4)).average, dec!(4.13));
    }

    #[test]
    fn removing_the_last_rating_resets_to_zero() {
        let mut vendor = VendorRating::default();
        vendor.record(stars(5));

        let after = vendor.revert(stars(5)).unwrap();
        assert_eq!(after.average, Decimal::ZERO);
        assert_eq!(after.count, 0);
        assert_eq!(vendor.revert(stars(5)), Err(RatingError::NoRatings));
    }

    #[test]
    fn recomputed_average_stays_within_bounds() {
        let mut vendor = VendorRating {
            average: dec!(1.00),
            count: 3,
        };
        // (3 - 5) / 2 would be -1.
        assert_eq!(vendor.revert(stars(5)).unwrap().average, dec!(1));
    }
}
