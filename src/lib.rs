//! Descriptive analytics over e-commerce transaction exports.
//!
//! A dataset is loaded once by [`loader`], then every query in [`analysis`]
//! reads it without mutation. [`report`] assembles the headline metrics.

pub mod analysis;
pub mod loader;
pub mod models;
pub mod report;
pub mod types;
