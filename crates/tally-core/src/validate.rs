//! # Validation Module
//!
//! Receipt shape and grammar validation for Tally Rewards.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP boundary (rewards-api)                                  │
//! │  ├── Body must parse as a JSON object                                  │
//! │  └── Fields must have the expected JSON types (strings, array)         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present                                           │
//! │  ├── Field grammars (retailer, date, time, currency, description)      │
//! │  └── Produces the typed Receipt the scorer consumes                    │
//! │                                                                         │
//! │  Any single failure rejects the whole document; no partial success.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use tally_core::{validate, RawReceipt};
//!
//! let raw = RawReceipt::default();
//! assert!(validate(&raw).is_err()); // everything is missing
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Item, RawItem, RawReceipt, Receipt};

/// Wire format for purchase dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for purchase times (24-hour clock).
const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Document Validation
// =============================================================================

/// Validates a raw receipt document and produces the typed [`Receipt`].
///
/// ## Checks, in order
/// 1. Required fields present: retailer, purchaseDate, purchaseTime,
///    items, total
/// 2. retailer: one or more characters, no whitespace anywhere
/// 3. purchaseDate: a real calendar date in `YYYY-MM-DD` form
/// 4. purchaseTime: a 24-hour `HH:MM` time
/// 5. total: one or more digits, a decimal point, exactly two digits
/// 6. items: at least one element
/// 7. each item: shortDescription present and matching its character set,
///    price matching the same currency grammar as total
///
/// The first failing check wins; no mutation, no side effects.
pub fn validate(raw: &RawReceipt) -> ValidationResult<Receipt> {
    let retailer = require(raw.retailer.as_deref(), "retailer")?;
    let purchase_date = require(raw.purchase_date.as_deref(), "purchaseDate")?;
    let purchase_time = require(raw.purchase_time.as_deref(), "purchaseTime")?;
    let raw_items = raw.items.as_ref().ok_or_else(|| ValidationError::Required {
        field: "items".to_string(),
    })?;
    let total = require(raw.total.as_deref(), "total")?;

    validate_retailer(retailer)?;
    let purchase_date = parse_purchase_date(purchase_date)?;
    let purchase_time = parse_purchase_time(purchase_time)?;
    let total = parse_currency(total, "total")?;

    if raw_items.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    let items = raw_items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(item, index))
        .collect::<ValidationResult<Vec<Item>>>()?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn require<'a>(value: Option<&'a str>, field: &str) -> ValidationResult<&'a str> {
    value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a retailer name.
///
/// ## Rules
/// - Must not be empty
/// - Must contain no whitespace characters anywhere
///
/// ## Example
/// ```rust
/// use tally_core::validate::validate_retailer;
///
/// assert!(validate_retailer("Target").is_ok());
/// assert!(validate_retailer("M&M").is_ok());
/// assert!(validate_retailer("").is_err());
/// assert!(validate_retailer("Corner Market").is_err());
/// ```
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    if retailer.is_empty() {
        return Err(ValidationError::Required {
            field: "retailer".to_string(),
        });
    }

    if retailer.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "retailer".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Parses a purchase date in `YYYY-MM-DD` form.
///
/// Impossible dates (2022-02-30, month 13) are rejected by the calendar
/// parser, not by a pattern check.
pub fn parse_purchase_date(value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: "purchaseDate".to_string(),
        reason: "must be a calendar date in YYYY-MM-DD form".to_string(),
    })
}

/// Parses a purchase time in 24-hour `HH:MM` form.
///
/// Out-of-range hours or minutes (25:00, 13:60) are rejected by the clock
/// parser.
pub fn parse_purchase_time(value: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: "purchaseTime".to_string(),
        reason: "must be a 24-hour time in HH:MM form".to_string(),
    })
}

/// Parses a currency amount: one or more digits, a decimal point, exactly
/// two digits. No sign, no thousands separators.
pub fn parse_currency(value: &str, field: &str) -> ValidationResult<Money> {
    value
        .parse::<Money>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a currency amount with exactly two decimal places".to_string(),
        })
}

/// Validates an item description.
///
/// ## Rules
/// - Must not be empty
/// - Characters limited to letters, digits, underscores, whitespace,
///   and hyphens
pub fn validate_description(description: &str, field: &str) -> ValidationResult<()> {
    if description.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if !description
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace())
    {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only word characters, whitespace, and hyphens".to_string(),
        });
    }

    Ok(())
}

fn validate_item(raw: &RawItem, index: usize) -> ValidationResult<Item> {
    let description_field = format!("items[{index}].shortDescription");
    let price_field = format!("items[{index}].price");

    let description = raw
        .short_description
        .as_deref()
        .ok_or_else(|| ValidationError::Required {
            field: description_field.clone(),
        })?;
    validate_description(description, &description_field)?;

    let price = raw.price.as_deref().ok_or_else(|| ValidationError::Required {
        field: price_field.clone(),
    })?;
    let price = parse_currency(price, &price_field)?;

    Ok(Item {
        description: description.to_string(),
        price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item(description: &str, price: &str) -> RawItem {
        RawItem {
            short_description: Some(description.to_string()),
            price: Some(price.to_string()),
        }
    }

    fn valid_raw() -> RawReceipt {
        RawReceipt {
            retailer: Some("Target".to_string()),
            purchase_date: Some("2022-01-01".to_string()),
            purchase_time: Some("13:01".to_string()),
            items: Some(vec![raw_item("Mountain Dew 12PK", "6.49")]),
            total: Some("6.49".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_receipt() {
        let receipt = validate(&valid_raw()).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(
            receipt.purchase_date,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        );
        assert_eq!(
            receipt.purchase_time,
            NaiveTime::from_hms_opt(13, 1, 0).unwrap()
        );
        assert_eq!(receipt.total, Money::from_cents(649));
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price, Money::from_cents(649));
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let mut raw = valid_raw();
        raw.retailer = None;
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Required { field }) if field == "retailer"
        ));

        let mut raw = valid_raw();
        raw.purchase_date = None;
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Required { field }) if field == "purchaseDate"
        ));

        let mut raw = valid_raw();
        raw.purchase_time = None;
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Required { field }) if field == "purchaseTime"
        ));

        let mut raw = valid_raw();
        raw.items = None;
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Required { field }) if field == "items"
        ));

        let mut raw = valid_raw();
        raw.total = None;
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Required { field }) if field == "total"
        ));
    }

    #[test]
    fn test_validate_retailer() {
        assert!(validate_retailer("Target").is_ok());
        assert!(validate_retailer("M&M").is_ok());
        assert!(validate_retailer("Walgreens#42").is_ok());

        assert!(validate_retailer("").is_err());
        assert!(validate_retailer("Corner Market").is_err());
        assert!(validate_retailer(" Target").is_err());
        assert!(validate_retailer("Target\t").is_err());
    }

    #[test]
    fn test_parse_purchase_date() {
        assert!(parse_purchase_date("2022-01-01").is_ok());
        assert!(parse_purchase_date("2022-03-20").is_ok());

        assert!(parse_purchase_date("").is_err());
        assert!(parse_purchase_date("01-01-2022").is_err());
        assert!(parse_purchase_date("2022/01/01").is_err());
        assert!(parse_purchase_date("2022-02-30").is_err());
        assert!(parse_purchase_date("2022-13-01").is_err());
        assert!(parse_purchase_date("not-a-date").is_err());
    }

    #[test]
    fn test_parse_purchase_time() {
        assert!(parse_purchase_time("00:00").is_ok());
        assert!(parse_purchase_time("13:01").is_ok());
        assert!(parse_purchase_time("23:59").is_ok());

        assert!(parse_purchase_time("").is_err());
        assert!(parse_purchase_time("24:00").is_err());
        assert!(parse_purchase_time("25:00").is_err());
        assert!(parse_purchase_time("13:60").is_err());
        assert!(parse_purchase_time("1301").is_err());
        assert!(parse_purchase_time("13:01:30").is_err());
        assert!(parse_purchase_time("1:01pm").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_total() {
        for bad in ["1.2.00", "6.4", "6.495", "-1.00", "1,000.00", "six.49", ""] {
            let mut raw = valid_raw();
            raw.total = Some(bad.to_string());
            assert!(validate(&raw).is_err(), "accepted total {:?}", bad);
        }
    }

    #[test]
    fn test_validate_rejects_empty_items() {
        let mut raw = valid_raw();
        raw.items = Some(vec![]);
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Empty { field }) if field == "items"
        ));
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Mountain Dew 12PK", "d").is_ok());
        assert!(validate_description("Klarbrunn 12-PK 12 FL OZ", "d").is_ok());
        assert!(validate_description("trail_mix", "d").is_ok());

        assert!(validate_description("", "d").is_err());
        assert!(validate_description("Chips & Salsa", "d").is_err());
        assert!(validate_description("50% off!", "d").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_items() {
        // Missing shortDescription
        let mut raw = valid_raw();
        raw.items = Some(vec![RawItem {
            short_description: None,
            price: Some("6.49".to_string()),
        }]);
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Required { field }) if field == "items[0].shortDescription"
        ));

        // Missing price
        let mut raw = valid_raw();
        raw.items = Some(vec![RawItem {
            short_description: Some("Mountain Dew 12PK".to_string()),
            price: None,
        }]);
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::Required { field }) if field == "items[0].price"
        ));

        // Bad description charset
        let mut raw = valid_raw();
        raw.items = Some(vec![raw_item("Chips & Salsa", "6.49")]);
        assert!(validate(&raw).is_err());

        // Bad price grammar, and the failing index is reported
        let mut raw = valid_raw();
        raw.items = Some(vec![raw_item("Gatorade", "2.25"), raw_item("Gatorade", "2.2")]);
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::InvalidFormat { field, .. }) if field == "items[1].price"
        ));
    }
}
