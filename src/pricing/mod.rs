//! Pricing engine module for rental quotes.
//!
//! Turns a booking form (category, dates, corporate flag, locations) into an
//! itemized price. The engine itself is pure; `routes` exposes it over
//! HTTP/JSON for the booking site.

pub mod calculators;
pub mod calendar;
pub mod models;
pub mod policy;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use calendar::{enumerate_rental_days, is_weekend_day};
pub use models::{Category, DailyRateEntry, PriceBreakdown, RentalRequest};
pub use policy::{PolicyError, PricingPolicy, Rounding};
pub use routes::router;
pub use services::{PricingEngine, PricingError};
