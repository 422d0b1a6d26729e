//! Request DTOs for pricing API endpoints.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use super::models::{Category, RentalRequest};
use super::services::PricingError;

/// Booking form as posted by the site.
///
/// Field names follow the form inputs. Dates arrive as the raw strings of
/// the `datetime-local` pickers.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub pickup_datetime: String,
    #[serde(default)]
    pub return_datetime: String,
    #[serde(default)]
    pub corporate: bool,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub return_location: String,
    #[serde(default)]
    pub different_return: bool,
}

impl QuoteRequest {
    /// Validate the form into a request the engine can price.
    ///
    /// Both dates must parse, the return must not precede the pickup and the
    /// span may cover at most `max_rental_days` calendar days.
    pub fn into_rental_request(self, max_rental_days: u32) -> Result<RentalRequest, PricingError> {
        let pickup_at = parse_form_datetime(&self.pickup_datetime).ok_or_else(|| {
            PricingError::InvalidDates {
                reason: format!("unparseable pickup date {:?}", self.pickup_datetime),
            }
        })?;
        let return_at = parse_form_datetime(&self.return_datetime).ok_or_else(|| {
            PricingError::InvalidDates {
                reason: format!("unparseable return date {:?}", self.return_datetime),
            }
        })?;

        if return_at < pickup_at {
            return Err(PricingError::InvalidDates {
                reason: format!("return {} is before pickup {}", return_at, pickup_at),
            });
        }

        let span_days = (return_at.date() - pickup_at.date()).num_days() + 1;
        if span_days > i64::from(max_rental_days) {
            return Err(PricingError::InvalidDates {
                reason: format!(
                    "rental spans {} days, at most {} allowed",
                    span_days, max_rental_days
                ),
            });
        }

        Ok(RentalRequest {
            category: Category::from_form_value(self.category.as_deref()),
            pickup_at,
            return_at,
            corporate: self.corporate,
            pickup_location: self.pickup_location,
            return_location: self.return_location,
            different_return_requested: self.different_return,
        })
    }
}

/// Parse a date picker value.
///
/// Accepts `datetime-local` values (`2025-03-07T10:00`, optionally with
/// seconds), RFC 3339 timestamps (wall-clock time is kept, the offset is
/// dropped) and bare dates, which are taken as midnight.
pub fn parse_form_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_DAYS: u32 = 365;

    fn form(pickup: &str, dropoff: &str) -> QuoteRequest {
        QuoteRequest {
            category: Some("carro".to_string()),
            pickup_datetime: pickup.to_string(),
            return_datetime: dropoff.to_string(),
            corporate: false,
            pickup_location: "Lisboa".to_string(),
            return_location: String::new(),
            different_return: false,
        }
    }

    #[test]
    fn test_parse_datetime_local() {
        let parsed = parse_form_datetime("2025-03-07T10:30").unwrap();
        assert_eq!(parsed.to_string(), "2025-03-07 10:30:00");

        let parsed = parse_form_datetime("2025-03-07T10:30:15").unwrap();
        assert_eq!(parsed.to_string(), "2025-03-07 10:30:15");
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        let parsed = parse_form_datetime("2025-03-30T23:30:00+01:00").unwrap();
        assert_eq!(parsed.to_string(), "2025-03-30 23:30:00");
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let parsed = parse_form_datetime(" 2025-03-07 ").unwrap();
        assert_eq!(parsed.to_string(), "2025-03-07 00:00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_form_datetime("").is_none());
        assert!(parse_form_datetime("amanhã").is_none());
        assert!(parse_form_datetime("2025-02-30T10:00").is_none());
    }

    #[test]
    fn test_valid_form_converts() {
        let mut quote_form = form("2025-03-07T10:00", "2025-03-09T10:00");
        quote_form.category = Some("carrinha".to_string());
        quote_form.corporate = true;
        quote_form.different_return = true;
        quote_form.return_location = "Porto".to_string();

        let request = quote_form.into_rental_request(MAX_DAYS).unwrap();
        assert_eq!(request.category, Category::Van);
        assert!(request.corporate);
        assert!(request.different_return_requested);
        assert_eq!(request.return_location, "Porto");
        assert_eq!(request.pickup_at.date().to_string(), "2025-03-07");
    }

    #[test]
    fn test_same_instant_is_accepted() {
        assert!(form("2025-03-07T10:00", "2025-03-07T10:00")
            .into_rental_request(MAX_DAYS)
            .is_ok());
    }

    #[test]
    fn test_return_before_pickup_rejected() {
        let err = form("2025-03-07T10:00", "2025-03-07T09:59")
            .into_rental_request(MAX_DAYS)
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidDates { .. }));

        let err = form("2025-03-09T10:00", "2025-03-07T10:00")
            .into_rental_request(MAX_DAYS)
            .unwrap_err();
        assert!(err.to_string().contains("before pickup"));
    }

    #[test]
    fn test_span_limit_boundary() {
        // 2025-01-01 + 364 days = 2025-12-31, exactly 365 calendar days
        assert!(form("2025-01-01T10:00", "2025-12-31T09:00")
            .into_rental_request(MAX_DAYS)
            .is_ok());

        let err = form("2025-01-01T10:00", "2026-01-01T09:00")
            .into_rental_request(MAX_DAYS)
            .unwrap_err();
        assert!(err.to_string().contains("366 days"));
    }

    #[test]
    fn test_huge_spans_rejected() {
        let err = form("0001-01-01T00:00", "9999-12-31T00:00")
            .into_rental_request(MAX_DAYS)
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidDates { .. }));

        assert!(form("2025-01-01T00:00", "+200000-01-01T00:00")
            .into_rental_request(MAX_DAYS)
            .is_err());
    }

    #[test]
    fn test_span_limit_counts_dates_not_hours() {
        // 23:30 to 00:15 the next day touches two dates
        assert!(form("2025-03-03T23:30", "2025-03-04T00:15")
            .into_rental_request(1)
            .is_err());
        assert!(form("2025-03-03T08:00", "2025-03-03T20:00")
            .into_rental_request(1)
            .is_ok());
    }

    #[test]
    fn test_missing_dates_rejected() {
        let err = form("", "2025-03-07T10:00").into_rental_request(MAX_DAYS).unwrap_err();
        assert!(err.to_string().contains("pickup"));

        let err = form("2025-03-07T10:00", "nope").into_rental_request(MAX_DAYS).unwrap_err();
        assert!(err.to_string().contains("return"));
    }

    #[test]
    fn test_unknown_category_clamps_to_car() {
        let mut quote_form = form("2025-03-07T10:00", "2025-03-07T10:00");
        quote_form.category = Some("camião".to_string());
        assert_eq!(quote_form.into_rental_request(MAX_DAYS).unwrap().category, Category::Car);

        let mut quote_form = form("2025-03-07T10:00", "2025-03-07T10:00");
        quote_form.category = None;
        assert_eq!(quote_form.into_rental_request(MAX_DAYS).unwrap().category, Category::Car);
    }

    #[test]
    fn test_deserialize_minimal_form() {
        let json = r#"{
            "pickup_datetime": "2025-03-07T10:00",
            "return_datetime": "2025-03-08T10:00"
        }"#;
        let quote_form: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(!quote_form.corporate);
        assert!(quote_form.category.is_none());
        assert!(quote_form.into_rental_request(MAX_DAYS).is_ok());
    }
}
