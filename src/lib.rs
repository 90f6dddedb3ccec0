//! # Paddock
//!
//! A season analysis engine for sim-racing league results.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (events, drivers, results, derived views)
//! - **normalize**: Raw result row coercion into canonical results
//! - **analysis**: Driver summaries, standings, highlights and trend series
//! - **snapshot**: Season snapshot loading and content fingerprinting

pub mod analysis;
pub mod models;
pub mod normalize;
pub mod snapshot;

pub use models::*;
