//! Domain models for rental quotes.
//!
//! Plain values only: a request goes in, a breakdown comes out.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vehicle class. Each category has its own weekday/weekend rate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Car,
    Van,
}

impl Category {
    /// Map a booking form value onto a category.
    ///
    /// The site posts `carro` / `carrinha`; English names are accepted too.
    /// Anything unrecognised (or missing) falls back to [`Category::Car`].
    pub fn from_form_value(value: Option<&str>) -> Self {
        let raw = value.unwrap_or("").trim();
        match raw.to_lowercase().as_str() {
            "carro" | "carros" | "car" => Category::Car,
            "carrinha" | "carrinhas" | "van" => Category::Van,
            _ => {
                tracing::warn!("Unrecognised vehicle category {:?}, using car", raw);
                Category::default()
            }
        }
    }
}

/// A validated quote request.
///
/// `return_at >= pickup_at` is established by the booking form validation
/// before a request reaches the engine.
#[derive(Debug, Clone)]
pub struct RentalRequest {
    pub category: Category,
    pub pickup_at: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub corporate: bool,
    pub pickup_location: String,
    pub return_location: String,
    pub different_return_requested: bool,
}

/// One calendar day of the rental and the rate charged for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRateEntry {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub rate: Decimal,
}

/// Itemized result of one pricing computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub days_count: u32,
    pub base_total: Decimal,
    pub discount_rate: Decimal,
    pub discount_amount: Decimal,
    pub one_way_fee: Decimal,
    pub grand_total: Decimal,
    pub line_items: Vec<DailyRateEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_form_value() {
        assert_eq!(Category::from_form_value(Some("carro")), Category::Car);
        assert_eq!(Category::from_form_value(Some("carrinha")), Category::Van);
        assert_eq!(Category::from_form_value(Some("  Carrinha ")), Category::Van);
        assert_eq!(Category::from_form_value(Some("VAN")), Category::Van);
        assert_eq!(Category::from_form_value(Some("car")), Category::Car);
    }

    #[test]
    fn test_category_unknown_clamps_to_car() {
        assert_eq!(Category::from_form_value(Some("mota")), Category::Car);
        assert_eq!(Category::from_form_value(Some("")), Category::Car);
        assert_eq!(Category::from_form_value(None), Category::Car);
    }

    #[test]
    fn test_category_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Van).unwrap(), "\"van\"");
        let parsed: Category = serde_json::from_str("\"car\"").unwrap();
        assert_eq!(parsed, Category::Car);
    }
}
