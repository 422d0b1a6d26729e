//! Pricing policy: rate table, corporate discount tiers, one-way fee and
//! rounding mode.
//!
//! The default policy is the published tariff. A different policy can be
//! loaded from JSON (see `Config::load_policy`) and is validated before use.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::models::Category;

/// Largest rate or fee a policy may carry. Together with
/// [`MAX_RENTAL_DAYS_LIMIT`] this keeps every quote far inside `Decimal`'s
/// range.
pub const MAX_AMOUNT: Decimal = dec!(1000000);

/// Upper limit for `max_rental_days` in a policy file
pub const MAX_RENTAL_DAYS_LIMIT: u32 = 3650;

fn default_max_rental_days() -> u32 {
    365
}

/// A pricing policy that cannot be used
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct PolicyError {
    pub message: String,
    pub errors: Vec<String>,
}

/// Weekday/weekend rate pair for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRates {
    pub weekday: Decimal,
    pub weekend: Decimal,
}

impl DayRates {
    pub fn for_day(&self, is_weekend: bool) -> Decimal {
        if is_weekend {
            self.weekend
        } else {
            self.weekday
        }
    }
}

/// Category x day kind -> daily rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub car: DayRates,
    pub van: DayRates,
}

impl RateTable {
    pub fn for_category(&self, category: Category) -> &DayRates {
        match category {
            Category::Car => &self.car,
            Category::Van => &self.van,
        }
    }
}

/// Corporate discount granted from `min_days` onwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_days: u32,
    pub rate: Decimal,
}

/// How exact halves are rounded when money is rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// 0.125 -> 0.13
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 0.125 -> 0.12, 0.135 -> 0.14
    HalfEven,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub rates: RateTable,
    pub corporate_tiers: Vec<DiscountTier>,
    pub one_way_fee: Decimal,
    #[serde(default)]
    pub rounding: Rounding,
    /// Longest rental span, in calendar days, the booking form accepts
    #[serde(default = "default_max_rental_days")]
    pub max_rental_days: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            rates: RateTable {
                car: DayRates {
                    weekday: dec!(6),
                    weekend: dec!(15),
                },
                van: DayRates {
                    weekday: dec!(12),
                    weekend: dec!(20),
                },
            },
            corporate_tiers: vec![
                DiscountTier {
                    min_days: 1,
                    rate: dec!(0.10),
                },
                DiscountTier {
                    min_days: 3,
                    rate: dec!(0.20),
                },
            ],
            one_way_fee: dec!(30),
            rounding: Rounding::HalfAwayFromZero,
            max_rental_days: default_max_rental_days(),
        }
    }
}

impl PricingPolicy {
    /// Discount fraction for a rental of `days_count` days.
    ///
    /// Picks the tier with the largest `min_days` not above the span, so a
    /// span sitting exactly on a threshold gets the higher tier.
    pub fn discount_rate(&self, corporate: bool, days_count: u32) -> Decimal {
        if !corporate {
            return Decimal::ZERO;
        }
        self.corporate_tiers
            .iter()
            .filter(|tier| tier.min_days <= days_count)
            .max_by_key(|tier| tier.min_days)
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Check the policy for values the engine cannot price with.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let mut errors = Vec::new();

        for (name, rates) in [("car", &self.rates.car), ("van", &self.rates.van)] {
            for (kind, amount) in [("weekday", rates.weekday), ("weekend", rates.weekend)] {
                if amount.is_sign_negative() {
                    errors.push(format!("rates.{}.{} is negative", name, kind));
                } else if amount > MAX_AMOUNT {
                    errors.push(format!("rates.{}.{} exceeds {}", name, kind, MAX_AMOUNT));
                }
            }
        }

        if self.corporate_tiers.is_empty() {
            errors.push("corporate_tiers is empty".to_string());
        }
        for (i, tier) in self.corporate_tiers.iter().enumerate() {
            if tier.min_days == 0 {
                errors.push(format!("corporate_tiers[{}].min_days must be at least 1", i));
            }
            if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
                errors.push(format!("corporate_tiers[{}].rate must be between 0 and 1", i));
            }
        }

        if self.one_way_fee.is_sign_negative() {
            errors.push("one_way_fee is negative".to_string());
        } else if self.one_way_fee > MAX_AMOUNT {
            errors.push(format!("one_way_fee exceeds {}", MAX_AMOUNT));
        }

        if self.max_rental_days == 0 || self.max_rental_days > MAX_RENTAL_DAYS_LIMIT {
            errors.push(format!(
                "max_rental_days must be between 1 and {}",
                MAX_RENTAL_DAYS_LIMIT
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PolicyError {
                message: format!("Invalid pricing policy ({} problems)", errors.len()),
                errors,
            })
        }
    }
}
