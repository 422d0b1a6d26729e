//! Fleet catalog shown next to a quote.

pub mod catalog;
pub mod routes;

pub use catalog::{FleetCatalog, Vehicle};
