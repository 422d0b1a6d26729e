//! Core pricing calculation functions.
//!
//! Pure functions for pricing math, no policy lookup and no I/O.

use rust_decimal::prelude::*;

use super::policy::Rounding;

/// Round to `places` decimal places and pin the scale to exactly `places`.
///
/// The scale is pinned so that `6` comes back as `6.00` and serializes that
/// way.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rentals_web::pricing::{round_money, Rounding};
///
/// assert_eq!(round_money(dec!(0.125), 2, Rounding::HalfAwayFromZero), dec!(0.13));
/// assert_eq!(round_money(dec!(0.125), 2, Rounding::HalfEven), dec!(0.12));
/// assert_eq!(round_money(dec!(6), 2, Rounding::HalfEven).to_string(), "6.00");
/// ```
pub fn round_money(amount: Decimal, places: u32, rounding: Rounding) -> Decimal {
    let strategy = match rounding {
        Rounding::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
    };
    let mut rounded = amount.round_dp_with_strategy(places, strategy);
    rounded.rescale(places);
    rounded
}

/// Whether the one-way drop-off fee applies.
///
/// All three must hold: the customer asked for a different return location,
/// both locations are filled in, and they differ once surrounding whitespace
/// is ignored.
pub fn one_way_applies(
    different_return_requested: bool,
    pickup_location: &str,
    return_location: &str,
) -> bool {
    let pickup = pickup_location.trim();
    let dropoff = return_location.trim();
    different_return_requested && !pickup.is_empty() && !dropoff.is_empty() && pickup != dropoff
}
