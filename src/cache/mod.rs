//! In-memory forecast cache
//!
//! Holds the latest normalized snapshots for every beach and backs the HTTP
//! read path.

pub mod store;

pub use store::{BeachReport, ForecastCache};
