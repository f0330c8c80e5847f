// Jensen-Shannon distance between topic distributions.
//
//   mix      = (p + q) / 2
//   JS(p, q) = sqrt( KL(p || mix) / 2 + KL(q || mix) / 2 )
//
// Natural log, so distances fall in [0, sqrt(ln 2)]. KL terms with a zero
// numerator are zero, and the mixture is only zero where both inputs are,
// so the distance is finite for any pair of valid distributions.

use super::error::{RecommendError, Subject};
use super::matrix::{validate_distribution, TopicMatrix};

/// Kullback-Leibler divergence `KL(a || b)` with `0 * ln(0 / x) = 0`.
///
/// Returns infinity when `a` has mass where `b` has none.
pub fn kl_divergence(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .filter(|&(&x, _)| x > 0.0)
        .map(|(&x, &y)| x * (x / y).ln())
        .sum()
}

/// Jensen-Shannon distance between two equal-length distributions.
pub fn jensen_shannon_distance(p: &[f64], q: &[f64]) -> f64 {
    let mix: Vec<f64> = p.iter().zip(q).map(|(a, b)| 0.5 * (a + b)).collect();
    let divergence = 0.5 * kl_divergence(p, &mix) + 0.5 * kl_divergence(q, &mix);
    // Rounding can leave a tiny negative value for identical inputs
    divergence.max(0.0).sqrt()
}

/// Distance from `query` to every row of `matrix`, in row order.
pub fn jensen_shannon(query: &[f64], matrix: &TopicMatrix) -> Result<Vec<f64>, RecommendError> {
    validate_distribution(query, matrix.topics(), Subject::Query)?;
    Ok(matrix
        .rows()
        .map(|row| jensen_shannon_distance(query, row))
        .collect())
}
