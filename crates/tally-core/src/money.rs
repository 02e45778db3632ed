//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.29 % 0.25 = 0.039999...  ❌ misclassifies a non-quarter total      │
//! │    2.00 % 0.25 = 0.0          ✓  but only by luck of representation    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    29 % 25 = 4   → not a quarter multiple, exactly                      │
//! │    200 % 25 = 0  → quarter multiple, exactly                            │
//! │                                                                         │
//! │  Divisibility checks on totals MUST be exact: they decide whether a    │
//! │  receipt earns its 50- and 25-point bonuses.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Parse from the wire grammar: digits, a dot, exactly two decimals
//! let total: Money = "9.00".parse().unwrap();
//! assert!(total.is_round_dollar());
//! assert!(total.is_quarter_multiple());
//!
//! // Create from cents directly
//! let price = Money::from_cents(649); // 6.49
//! assert!(!price.is_round_dollar());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 cents**: exact arithmetic; the divisibility bonuses never suffer
///   binary-float representation error
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Parsed, never computed from floats**: the only lossy path is rejected
///   at the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(649); // Represents 6.49
    /// assert_eq!(price.cents(), 649);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks whether the amount is a whole-dollar value with no cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_round_dollar());  // 9.00
    /// assert!(!Money::from_cents(999).is_round_dollar()); // 9.99
    /// ```
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Checks whether the amount is an exact multiple of 25 cents.
    ///
    /// Exact by construction: the check runs on integer cents, so amounts
    /// like 0.29 can never be misclassified the way `total % 0.25` on a
    /// binary float would.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert!(Money::from_cents(225).is_quarter_multiple());  // 2.25
    /// assert!(!Money::from_cents(29).is_quarter_multiple());  // 0.29
    /// ```
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error returned when a string is not a well-formed currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a currency amount with exactly two decimal places")]
pub struct ParseMoneyError;

/// Parses the strict wire grammar: one or more digits, a decimal point,
/// exactly two digits. No sign, no thousands separators, no whitespace.
///
/// ## Accepted / Rejected
/// ```text
/// "6.49"    ✓        "6.4"     ✗ (one decimal)
/// "0.00"    ✓        "6.495"   ✗ (three decimals)
/// "100.00"  ✓        ".49"     ✗ (no whole part)
/// "007.25"  ✓        "-1.00"   ✗ (signed)
///                    "1,000.00"✗ (separator)
///                    "1.2.00"  ✗ (two dots)
/// ```
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s.split_once('.').ok_or(ParseMoneyError)?;

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }
        if frac.len() != 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError);
        }

        let dollars: i64 = whole.parse().map_err(|_| ParseMoneyError)?;
        let minor: i64 = frac.parse().map_err(|_| ParseMoneyError)?;

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money)
            .ok_or(ParseMoneyError)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display round-trips with the wire grammar (`"6.49"`, `"0.05"`).
///
/// ## Note
/// This is for logs and debugging. The service never echoes amounts back
/// to clients.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
