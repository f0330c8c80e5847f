// Recommender input-validation errors.
//
// Bad topic vectors are rejected at the boundary so the distance formula
// never sees a NaN, a negative weight or a mismatched length.

use std::fmt;

use thiserror::Error;

/// Which vector a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Query,
    Row(usize),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Query => f.write_str("query"),
            Subject::Row(i) => write!(f, "row {i}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    #[error("topic matrix has no rows")]
    EmptyMatrix,

    #[error("{subject} has {actual} topic weights, expected {expected}")]
    WrongLength {
        subject: Subject,
        expected: usize,
        actual: usize,
    },

    #[error("{subject} has weight {value} for topic {topic}; weights must be finite and non-negative")]
    InvalidWeight {
        subject: Subject,
        topic: usize,
        value: f64,
    },

    #[error("{subject} weights sum to {sum}, expected 1")]
    NotNormalized { subject: Subject, sum: f64 },

    #[error("asked for {k} documents but only {available} can be ranked")]
    NotEnoughDocuments { k: usize, available: usize },

    #[error("document index {index} is out of range for {len} documents")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{titles} titles given for {rows} topic rows")]
    CatalogMismatch { titles: usize, rows: usize },
}
