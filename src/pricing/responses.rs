//! Response DTOs for pricing API endpoints.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::models::{Category, DailyRateEntry, PriceBreakdown};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// One day of the itemized breakdown
#[derive(Debug, Clone, Serialize)]
pub struct LineItemResponse {
    pub date: NaiveDate,
    pub weekend: bool,
    /// e.g. `sáb, 08/03/2025 (Fim de semana)`
    pub label: String,
    pub value: MoneyResponse,
}

/// Response for a price quote
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub category: Category,
    pub days_count: u32,
    pub base: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_rate: Decimal,
    pub discount: MoneyResponse,
    pub one_way_fee: MoneyResponse,
    pub total: MoneyResponse,
    pub breakdown: Vec<LineItemResponse>,
}

impl QuoteResponse {
    pub fn from_breakdown(category: Category, breakdown: PriceBreakdown, currency: &str) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            category,
            days_count: breakdown.days_count,
            base: MoneyResponse::new(breakdown.base_total, currency),
            discount_rate: breakdown.discount_rate,
            discount: MoneyResponse::new(breakdown.discount_amount, currency),
            one_way_fee: MoneyResponse::new(breakdown.one_way_fee, currency),
            total: MoneyResponse::new(breakdown.grand_total, currency),
            breakdown: breakdown
                .line_items
                .iter()
                .map(|item| LineItemResponse {
                    date: item.date,
                    weekend: item.is_weekend,
                    label: line_item_label(item),
                    value: MoneyResponse::new(item.rate, currency),
                })
                .collect(),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

const WEEKDAYS_PT: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"];

/// Label a line item the way the site lists days: short pt-PT weekday, the
/// date as dd/mm/yyyy and the day kind.
pub fn line_item_label(item: &DailyRateEntry) -> String {
    let weekday = WEEKDAYS_PT[item.date.weekday().num_days_from_sunday() as usize];
    let kind = if item.is_weekend {
        "Fim de semana"
    } else {
        "Semana"
    };
    format!("{}, {} ({})", weekday, item.date.format("%d/%m/%Y"), kind)
}
