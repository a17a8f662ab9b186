//! Surfcast library
//!
//! Aggregates Open-Meteo weather and marine forecasts for a fixed set of
//! North Carolina beaches, scores surf quality, caches the normalized
//! results in memory, and serves them over HTTP.

pub mod cache;
pub mod cli;
pub mod data;
pub mod refresh;
pub mod server;
