//! # Scoring Module
//!
//! Computes loyalty points for a validated receipt.
//!
//! ## The Seven Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Points Rules                                      │
//! │                                                                         │
//! │  1. +1 per alphanumeric character in the retailer name                 │
//! │  2. +50 if the total is a round dollar amount (no cents)               │
//! │  3. +25 if the total is a multiple of 0.25                             │
//! │  4. +5 for every two items on the receipt                              │
//! │  5. per item: trimmed description length a non-zero multiple of 3      │
//! │     → ceil(price × 0.2) points                                         │
//! │  6. +6 if the day in the purchase date is odd                          │
//! │  7. +10 if the purchase hour falls in 14:00-16:59 inclusive            │
//! │                                                                         │
//! │  Rules are independent: each reads only validated fields, none reads   │
//! │  another's output. The total is their sum, in any order.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All currency math runs on integer cents; rule 5's round-up is integer
//! division, so no rule can drift with float representation.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::money::Money;
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Bonus for a total with zero fractional cents.
const ROUND_DOLLAR_BONUS: u64 = 50;

/// Bonus for a total that is an exact multiple of 25 cents.
const QUARTER_MULTIPLE_BONUS: u64 = 25;

/// Points per pair of items.
const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Bonus for an odd day-of-month.
const ODD_DAY_BONUS: u64 = 6;

/// Bonus for an afternoon purchase, and the inclusive hour range that
/// earns it. Hour 16 qualifies in full: 16:59 still earns the bonus.
const AFTERNOON_BONUS: u64 = 10;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

// =============================================================================
// Scoring
// =============================================================================

/// Computes the total points for a validated receipt.
///
/// Deterministic: the same receipt always scores the same points. The sum
/// is order-independent because no rule depends on another's output.
///
/// ## Example
/// ```rust
/// use tally_core::{score, validate, RawItem, RawReceipt};
///
/// let raw = RawReceipt {
///     retailer: Some("M&M".to_string()),
///     purchase_date: Some("2022-03-20".to_string()),
///     purchase_time: Some("14:33".to_string()),
///     items: Some(vec![RawItem {
///         short_description: Some("Gatorade".to_string()),
///         price: Some("2.25".to_string()),
///     }]),
///     total: Some("2.25".to_string()),
/// };
/// let receipt = validate(&raw).unwrap();
///
/// // 2 retailer chars + 25 quarter multiple + 10 afternoon
/// assert_eq!(score(&receipt), 37);
/// ```
pub fn score(receipt: &Receipt) -> u64 {
    retailer_points(&receipt.retailer)
        + round_dollar_points(receipt.total)
        + quarter_multiple_points(receipt.total)
        + item_pair_points(&receipt.items)
        + description_points(&receipt.items)
        + odd_day_points(receipt.purchase_date)
        + afternoon_points(receipt.purchase_time)
}

/// Rule 1: one point per alphanumeric character in the retailer name.
///
/// Letters and digits in any script count; punctuation and symbols do not
/// ("M&M Corner Market" scores 14, not 17).
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// Rule 2: 50 points if the total is a round dollar amount with no cents.
pub fn round_dollar_points(total: Money) -> u64 {
    if total.is_round_dollar() {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

/// Rule 3: 25 points if the total is an exact multiple of 0.25.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_quarter_multiple() {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

/// Rule 4: 5 points for every two items on the receipt.
pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2) * POINTS_PER_ITEM_PAIR
}

/// Rule 5: for each item whose trimmed description length is a non-zero
/// multiple of 3, add `ceil(price × 0.2)` points.
///
/// A description that trims to the empty string never qualifies, even
/// though zero is a multiple of 3. Lengths are counted in characters, not
/// bytes. The round-up is computed on cents: `ceil(cents / 500)`.
pub fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(|item| {
            let trimmed = item.description.trim();
            let length = trimmed.chars().count();
            if length > 0 && length % 3 == 0 {
                ((item.price.cents() + 499) / 500) as u64
            } else {
                0
            }
        })
        .sum()
}

/// Rule 6: 6 points if the day in the purchase date is odd.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_BONUS
    } else {
        0
    }
}

/// Rule 7: 10 points if the purchase hour is between 14 and 16 inclusive.
pub fn afternoon_points(time: NaiveTime) -> u64 {
    if (AFTERNOON_START_HOUR..=AFTERNOON_END_HOUR).contains(&time.hour()) {
        AFTERNOON_BONUS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
