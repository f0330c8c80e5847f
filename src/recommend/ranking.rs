// Nearest / farthest document ranking by Jensen-Shannon distance.
//
// When the query is a corpus row, that row is excluded by index from both
// directions. Equal distances keep ascending row order.

use serde::Serialize;

use super::divergence::jensen_shannon;
use super::error::RecommendError;
use super::matrix::TopicMatrix;

/// Where a query vector came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOrigin {
    /// The query is row `index` of the matrix; that row is never returned.
    Corpus(usize),
    /// The query is not part of the matrix; every row is a candidate.
    External,
}

/// A ranked document and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

/// The `k` documents closest to `query`, nearest first.
pub fn nearest(
    query: &[f64],
    matrix: &TopicMatrix,
    k: usize,
    origin: QueryOrigin,
) -> Result<Vec<Neighbor>, RecommendError> {
    let mut ranked = candidates(query, matrix, k, origin)?;
    ranked.truncate(k);
    Ok(ranked)
}

/// The `k` documents farthest from `query`, farthest first.
pub fn farthest(
    query: &[f64],
    matrix: &TopicMatrix,
    k: usize,
    origin: QueryOrigin,
) -> Result<Vec<Neighbor>, RecommendError> {
    let mut ranked = candidates(query, matrix, k, origin)?;
    ranked.sort_by(|a, b| b.distance.total_cmp(&a.distance));
    ranked.truncate(k);
    Ok(ranked)
}

/// Indices of the `k` most similar documents, ascending distance.
pub fn most_similar(
    query: &[f64],
    matrix: &TopicMatrix,
    k: usize,
    origin: QueryOrigin,
) -> Result<Vec<usize>, RecommendError> {
    Ok(nearest(query, matrix, k, origin)?
        .into_iter()
        .map(|n| n.index)
        .collect())
}

/// Indices of the `k` most different documents, descending distance.
pub fn most_different(
    query: &[f64],
    matrix: &TopicMatrix,
    k: usize,
    origin: QueryOrigin,
) -> Result<Vec<usize>, RecommendError> {
    Ok(farthest(query, matrix, k, origin)?
        .into_iter()
        .map(|n| n.index)
        .collect())
}

/// Every eligible row sorted by ascending distance. Equal distances keep
/// row order.
fn candidates(
    query: &[f64],
    matrix: &TopicMatrix,
    k: usize,
    origin: QueryOrigin,
) -> Result<Vec<Neighbor>, RecommendError> {
    let excluded = match origin {
        QueryOrigin::Corpus(index) if index >= matrix.len() => {
            return Err(RecommendError::IndexOutOfRange {
                index,
                len: matrix.len(),
            });
        }
        QueryOrigin::Corpus(index) => Some(index),
        QueryOrigin::External => None,
    };

    let available = matrix.len() - usize::from(excluded.is_some());
    if k > available {
        return Err(RecommendError::NotEnoughDocuments { k, available });
    }

    let distances = jensen_shannon(query, matrix)?;
    let mut ranked: Vec<Neighbor> = distances
        .into_iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != excluded)
        .map(|(index, distance)| Neighbor { index, distance })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(ranked)
}
