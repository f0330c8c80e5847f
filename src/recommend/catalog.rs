// Talk recommender: title lookup and "surprise me" on top of the ranking core.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::error::RecommendError;
use super::matrix::TopicMatrix;
use super::ranking::{farthest, nearest, Neighbor, QueryOrigin};

/// Find the first document whose title matches exactly (case-sensitive).
pub fn find_title<S: AsRef<str>>(title: &str, titles: &[S]) -> Option<usize> {
    titles.iter().position(|t| t.as_ref() == title)
}

/// Recommendations for one query talk.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Row of the query talk
    pub index: usize,
    /// The query talk's topic distribution
    pub distribution: Vec<f64>,
    /// Closest talks, nearest first
    pub most_similar: Vec<Neighbor>,
    /// Most distant talks, farthest first
    pub most_different: Vec<Neighbor>,
}

/// Talk titles paired row-for-row with their topic distributions.
#[derive(Debug, Clone)]
pub struct Recommender {
    titles: Vec<String>,
    matrix: TopicMatrix,
}

impl Recommender {
    pub fn new(titles: Vec<String>, matrix: TopicMatrix) -> Result<Self, RecommendError> {
        if titles.len() != matrix.len() {
            return Err(RecommendError::CatalogMismatch {
                titles: titles.len(),
                rows: matrix.len(),
            });
        }
        Ok(Self { titles, matrix })
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    pub fn matrix(&self) -> &TopicMatrix {
        &self.matrix
    }

    pub fn find_title(&self, title: &str) -> Option<usize> {
        find_title(title, &self.titles)
    }

    /// Rank the `k` most similar and most different talks for row `index`.
    pub fn recommend_for(&self, index: usize, k: usize) -> Result<Recommendation, RecommendError> {
        let query = self
            .matrix
            .row(index)
            .ok_or(RecommendError::IndexOutOfRange {
                index,
                len: self.matrix.len(),
            })?
            .to_vec();

        info!(index, k, "Getting recommendations for talk");

        let origin = QueryOrigin::Corpus(index);
        let most_similar = nearest(&query, &self.matrix, k, origin)?;
        let most_different = farthest(&query, &self.matrix, k, origin)?;

        Ok(Recommendation {
            index,
            distribution: query,
            most_similar,
            most_different,
        })
    }

    /// Recommendations for the talk with this exact title, or `None` when
    /// no talk matches.
    pub fn recommend_by_title(
        &self,
        title: &str,
        k: usize,
    ) -> Result<Option<Recommendation>, RecommendError> {
        match self.find_title(title) {
            Some(index) => self.recommend_for(index, k).map(Some),
            None => {
                info!(title, "No talk found");
                Ok(None)
            }
        }
    }

    /// Recommendations for a talk picked uniformly at random.
    pub fn recommend_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        k: usize,
    ) -> Result<Recommendation, RecommendError> {
        let index = rng.random_range(0..self.matrix.len());
        self.recommend_for(index, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn recommender() -> Recommender {
        let titles = vec![
            "Ocean life".to_string(),
            "Deep sea creatures".to_string(),
            "Startup funding".to_string(),
            "Urban design".to_string(),
        ];
        let matrix = TopicMatrix::new(vec![
            vec![0.9, 0.05, 0.05],
            vec![0.8, 0.1, 0.1],
            vec![0.05, 0.9, 0.05],
            vec![0.1, 0.1, 0.8],
        ])
        .unwrap();
        Recommender::new(titles, matrix).unwrap()
    }

    #[test]
    fn test_find_title_exact_match() {
        let titles = ["A", "B", "B"];
        assert_eq!(find_title("B", &titles), Some(1));
        assert_eq!(find_title("b", &titles), None);
    }

    #[test]
    fn test_recommend_by_title() {
        let rec = recommender().recommend_by_title("Ocean life", 1).unwrap().unwrap();
        assert_eq!(rec.index, 0);
        assert_eq!(rec.most_similar[0].index, 1);
        assert_eq!(rec.distribution, vec![0.9, 0.05, 0.05]);
    }

    #[test]
    fn test_recommend_unknown_title() {
        assert!(recommender()
            .recommend_by_title("ocean life", 1)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_random_recommendation_in_range() {
        let r = recommender();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let rec = r.recommend_random(&mut rng, 2).unwrap();
            assert!(rec.index < r.len());
            assert!(rec.most_similar.iter().all(|n| n.index != rec.index));
        }
    }

    #[test]
    fn test_mismatched_catalog() {
        let matrix = TopicMatrix::new(vec![vec![1.0]]).unwrap();
        let err = Recommender::new(vec![], matrix).unwrap_err();
        assert_eq!(err, RecommendError::CatalogMismatch { titles: 0, rows: 1 });
    }
}
