//! Utility modules for the dashboard projections
//!
//! Contains shared functionality used across multiple charts:
//! - Normalization: column-wise min-max scaling and shared radial scaling
//! - Colour: sequential colour ramps for heat-map cells and bars

pub mod normalization;
pub mod color;

// Re-export commonly used functions
pub use normalization::{min_max_normalize, shared_max_normalize, mean};
pub use color::{ColorRamp, Rgb};
