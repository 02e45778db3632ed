//! # Tally Rewards API
//!
//! Axum HTTP application for receipt ingestion and points retrieval.
//!
//! The binary in `main.rs` wires configuration, logging, and the listener;
//! everything else lives here so integration tests can drive the router
//! directly.
//!
//! ## Request Flow
//! ```text
//! POST /receipts/process
//!      │
//!      ▼
//! parse JSON body ──► tally_core::validate ──► tally_core::score
//!                                                    │
//!                                                    ▼
//!                                            PointsStore::put
//!                                                    │
//!                                                    ▼
//!                                            200 {"id": "<uuid>"}
//!
//! GET /receipts/{id}/points
//!      │
//!      ▼
//! PointsStore::get ──► 200 {"points": N}  |  404 not found
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use routes::create_router;
pub use state::AppState;
