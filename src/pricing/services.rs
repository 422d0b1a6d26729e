//! The quote service.
//!
//! `PricingEngine` walks the rental span day by day against a
//! [`PricingPolicy`]. It holds no mutable state, so one instance is shared
//! behind an `Arc` by every request handler.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calculators::{one_way_applies, round_money};
use super::calendar::{enumerate_rental_days, is_weekend_day};
use super::models::{Category, DailyRateEntry, PriceBreakdown, RentalRequest};
use super::policy::{PolicyError, PricingPolicy};

/// Pricing error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    /// The booking form carried dates we cannot price
    #[error("Invalid rental dates: {reason}")]
    InvalidDates { reason: String },
}

impl PricingError {
    /// Message shown to the customer by the booking form
    pub fn user_message(&self) -> &'static str {
        match self {
            PricingError::InvalidDates { .. } => {
                "Por favor, selecione datas válidas (devolução após levantamento)."
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    /// Build an engine after checking the policy is usable.
    pub fn new(policy: PricingPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Rate charged for `category` on `date`
    pub fn daily_rate(&self, category: Category, date: NaiveDate) -> Decimal {
        self.policy
            .rates
            .for_category(category)
            .for_day(is_weekend_day(date))
    }

    /// Price a validated rental request.
    ///
    /// Only the date part of the pickup and return instants matters. Discount
    /// and grand total are rounded to cents independently.
    pub fn quote(&self, request: &RentalRequest) -> PriceBreakdown {
        let days = enumerate_rental_days(request.pickup_at.date(), request.return_at.date());

        let mut base_total = Decimal::ZERO;
        let mut line_items = Vec::with_capacity(days.len());
        for date in days {
            let rate = self.daily_rate(request.category, date);
            base_total += rate;
            line_items.push(DailyRateEntry {
                date,
                is_weekend: is_weekend_day(date),
                rate,
            });
        }

        let days_count = line_items.len() as u32;
        let rounding = self.policy.rounding;

        let discount_rate = self.policy.discount_rate(request.corporate, days_count);
        let discount_amount = round_money(base_total * discount_rate, 2, rounding);

        let one_way_fee = if one_way_applies(
            request.different_return_requested,
            &request.pickup_location,
            &request.return_location,
        ) {
            self.policy.one_way_fee
        } else {
            Decimal::ZERO
        };

        let grand_total = round_money(base_total - discount_amount + one_way_fee, 2, rounding);

        tracing::debug!(
            category = ?request.category,
            days_count,
            %base_total,
            %discount_rate,
            %one_way_fee,
            %grand_total,
            "Quote computed"
        );

        PriceBreakdown {
            days_count,
            base_total,
            discount_rate,
            discount_amount,
            one_way_fee,
            grand_total,
            line_items,
        }
    }
}
