//! Error type for dataset validation and dashboard lookups

use thiserror::Error;

/// Errors raised by the dashboard library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Park '{0}' not found")]
    UnknownPark(String),

    #[error("Unknown dataset variant '{0}' (expected 'a' or 'b')")]
    UnknownVariant(String),

    #[error("Dataset '{0}' has no feasibility/urgency axes for the quadrant chart")]
    QuadrantUnavailable(&'static str),

    #[error("Park '{park}' supplies {found} attributes, schema has {expected}")]
    SchemaMismatch {
        park: String,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate park '{0}' in dataset")]
    DuplicatePark(String),

    #[error("Dataset schema has no attributes")]
    EmptySchema,

    #[error("Dataset '{0}' schema does not match its fixed column layout")]
    UnexpectedSchema(&'static str),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
