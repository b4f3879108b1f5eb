//! # Rugby Stats
//!
//! Statistics aggregation core for an amateur rugby club tracker.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (clubs, players, matches, stat records)
//! - **storage**: Filesystem data lake operations (JSONL)
//! - **store**: Entity accessors and scoped stat queries
//! - **calculate**: Aggregation primitives (sums, percentages, frequencies)
//! - **views**: Derived response shapes (stat bars, summaries, breakdowns)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod views;

pub use models::*;
