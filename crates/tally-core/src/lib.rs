//! # tally-core: Pure Business Logic for Tally Rewards
//!
//! This crate is the **heart** of Tally Rewards. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tally Rewards Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients (JSON)                          │   │
//! │  │    POST /receipts/process  ──►  GET /receipts/{id}/points       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rewards-api (Axum)                           │   │
//! │  │    request parsing, points store, HTTP error mapping            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validate  │  │   score   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  grammar  │  │  7 rules  │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  checks   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO RANDOMNESS • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (RawReceipt, Receipt, Item)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validate`] - Receipt shape and grammar validation
//! - [`score`] - The seven loyalty-points rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{score, validate, RawItem, RawReceipt};
//!
//! let raw = RawReceipt {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     items: Some(vec![RawItem {
//!         short_description: Some("Mountain Dew 12PK".to_string()),
//!         price: Some("6.49".to_string()),
//!     }]),
//!     total: Some("6.49".to_string()),
//! };
//!
//! let receipt = validate(&raw).expect("receipt is well formed");
//! assert_eq!(score(&receipt), 12); // 6 retailer chars + 6 odd-day bonus
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod score;
pub mod types;
pub mod validate;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use score::score;
pub use types::{Item, RawItem, RawReceipt, Receipt};
pub use validate::validate;
