// Document-topic matrix: one validated probability vector per document.

use serde::{Deserialize, Serialize};

use super::error::{RecommendError, Subject};

/// Allowed drift of a row sum from 1.0. LDA output is often stored as
/// f32, so exact equality is too strict.
pub const SUM_TOLERANCE: f64 = 1e-4;

/// Check that `weights` is a probability vector of length `expected_len`.
pub fn validate_distribution(
    weights: &[f64],
    expected_len: usize,
    subject: Subject,
) -> Result<(), RecommendError> {
    if weights.len() != expected_len {
        return Err(RecommendError::WrongLength {
            subject,
            expected: expected_len,
            actual: weights.len(),
        });
    }
    if let Some((topic, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(RecommendError::InvalidWeight {
            subject,
            topic,
            value,
        });
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(RecommendError::NotNormalized { subject, sum });
    }
    Ok(())
}

/// N×K matrix of topic distributions, rows indexed by document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct TopicMatrix {
    rows: Vec<Vec<f64>>,
    topics: usize,
}

impl TopicMatrix {
    /// Build a matrix, validating every row against the first row's length.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, RecommendError> {
        let topics = rows.first().map(Vec::len).ok_or(RecommendError::EmptyMatrix)?;
        for (i, row) in rows.iter().enumerate() {
            validate_distribution(row, topics, Subject::Row(i))?;
        }
        Ok(Self { rows, topics })
    }

    /// Number of documents (N).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of topics per row (K).
    pub fn topics(&self) -> usize {
        self.topics
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl TryFrom<Vec<Vec<f64>>> for TopicMatrix {
    type Error = RecommendError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<TopicMatrix> for Vec<Vec<f64>> {
    fn from(matrix: TopicMatrix) -> Self {
        matrix.rows
    }
}
