//! Park Priority Dashboard
//!
//! Scores parks for invasive-species work and projects the ranking onto
//! dashboard views.
//!
//! - `data`: compiled-in park tables and their attribute schemas
//! - `scorer`: linear priority scores and the stable descending ranking
//! - `presentation`: quadrant scatter, heat-map table, bar, radar, detail, formatters
//! - `utils`: normalization and colour ramps shared by the charts
//! - `api_server` / `web` (feature `api`): Axum JSON API and HTML page

pub mod error;
pub mod config;
pub mod utils;
pub mod data;
pub mod scorer;
pub mod presentation;

#[cfg(feature = "api")]
pub mod api_server;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use error::DashboardError;
pub use config::ServerConfig;
pub use data::{Annotation, Dataset, DatasetVariant, ParkRecord};
pub use scorer::{LinearCombination, ParkScorer, Ranking, ScoredPark, ScoringScheme};
pub use presentation::{Dashboard, DashboardGenerator, Selection};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
