//! # Domain Types
//!
//! Core domain types used throughout Tally Rewards.
//!
//! ## Two Shapes of a Receipt
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Receipt Type Hierarchy                            │
//! │                                                                         │
//! │  Wire shape (serde, everything optional):                               │
//! │  ┌──────────────────┐        ┌──────────────────┐                       │
//! │  │   RawReceipt     │        │     RawItem      │                       │
//! │  │  ──────────────  │  1..*  │  ──────────────  │                       │
//! │  │  retailer?       │───────►│  shortDescription│                       │
//! │  │  purchaseDate?   │        │  price?          │                       │
//! │  │  purchaseTime?   │        └──────────────────┘                       │
//! │  │  items?          │                                                   │
//! │  │  total?          │                validate()                         │
//! │  └──────────────────┘                    │                              │
//! │                                          ▼                              │
//! │  Validated shape (typed, nothing optional):                             │
//! │  ┌──────────────────┐        ┌──────────────────┐                       │
//! │  │     Receipt      │        │       Item       │                       │
//! │  │  ──────────────  │  1..*  │  ──────────────  │                       │
//! │  │  retailer        │───────►│  description     │                       │
//! │  │  NaiveDate       │        │  price: Money    │                       │
//! │  │  NaiveTime       │        └──────────────────┘                       │
//! │  │  total: Money    │                                                   │
//! │  └──────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wire shape keeps every field an `Option<String>` so that *missing
//! field* and *bad grammar* are decided by [`crate::validate`], not by the
//! deserializer. Only the scorer ever sees the validated shape, so every
//! rule reads real dates, times, and integer cents.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Wire Shape
// =============================================================================

/// An inbound receipt document exactly as it appears on the wire.
///
/// Field names follow the JSON contract (`purchaseDate`, `purchaseTime`,
/// `shortDescription`). Unknown fields are ignored; absent fields surface
/// as `None` for the validator to reject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    /// Retailer or store name.
    pub retailer: Option<String>,

    /// Purchase date, expected as `YYYY-MM-DD`.
    pub purchase_date: Option<String>,

    /// Purchase time, expected as 24-hour `HH:MM`.
    pub purchase_time: Option<String>,

    /// Purchased line items, at least one required.
    pub items: Option<Vec<RawItem>>,

    /// Receipt total, expected as a two-decimal currency string.
    pub total: Option<String>,
}

/// A line item exactly as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Short product description.
    pub short_description: Option<String>,

    /// Item price, expected as a two-decimal currency string.
    pub price: Option<String>,
}

// =============================================================================
// Validated Shape
// =============================================================================

/// A fully validated receipt.
///
/// Only [`crate::validate::validate`] constructs this type, so holding a
/// `Receipt` is proof that every field grammar passed. Not persisted -
/// only its derived points survive ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Retailer name, one or more characters with no whitespace.
    pub retailer: String,

    /// Calendar date of purchase.
    pub purchase_date: NaiveDate,

    /// Wall-clock time of purchase (24-hour, minute precision).
    pub purchase_time: NaiveTime,

    /// Purchased line items, never empty.
    pub items: Vec<Item>,

    /// Receipt total in exact cents.
    pub total: Money,
}

/// A validated line item. No identity of its own; exists only inside a
/// [`Receipt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Short product description (word characters, whitespace, hyphens).
    pub description: String,

    /// Item price in exact cents.
    pub price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_receipt_deserializes_camel_case() {
        let raw: RawReceipt = serde_json::from_str(
            r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
                "total": "6.49"
            }"#,
        )
        .unwrap();

        assert_eq!(raw.retailer.as_deref(), Some("Target"));
        assert_eq!(raw.purchase_date.as_deref(), Some("2022-01-01"));
        assert_eq!(raw.purchase_time.as_deref(), Some("13:01"));
        assert_eq!(raw.total.as_deref(), Some("6.49"));
        let items = raw.items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].short_description.as_deref(), Some("Mountain Dew 12PK"));
        assert_eq!(items[0].price.as_deref(), Some("6.49"));
    }

    #[test]
    fn test_raw_receipt_missing_fields_become_none() {
        let raw: RawReceipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert!(raw.retailer.is_some());
        assert!(raw.purchase_date.is_none());
        assert!(raw.purchase_time.is_none());
        assert!(raw.items.is_none());
        assert!(raw.total.is_none());
    }

    #[test]
    fn test_raw_receipt_ignores_unknown_fields() {
        let raw: RawReceipt =
            serde_json::from_str(r#"{"invalid_field": "value", "retailer": "Target"}"#).unwrap();
        assert_eq!(raw.retailer.as_deref(), Some("Target"));
    }

    #[test]
    fn test_raw_receipt_rejects_wrong_field_types() {
        // total must be a string on the wire, not a JSON number
        let result = serde_json::from_str::<RawReceipt>(r#"{"total": 6.49}"#);
        assert!(result.is_err());

        // items must be a sequence of objects
        let result = serde_json::from_str::<RawReceipt>(r#"{"items": ["just a string"]}"#);
        assert!(result.is_err());
    }
}
