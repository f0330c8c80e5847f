// Fitted topic-word model: per-topic word weights over the vectorizer's
// vocabulary. Fitting happens offline; this is the loaded artifact.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("topic {topic} has {actual} word weights but the vocabulary has {expected} words")]
    VocabularyMismatch {
        topic: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicModel {
    /// Vectorizer feature names, indexed by column
    pub vocabulary: Vec<String>,
    /// One row of word weights per topic
    pub components: Vec<Vec<f64>>,
}

impl TopicModel {
    /// Check every topic row covers the whole vocabulary.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (topic, row) in self.components.iter().enumerate() {
            if row.len() != self.vocabulary.len() {
                return Err(ModelError::VocabularyMismatch {
                    topic,
                    expected: self.vocabulary.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }

    pub fn topic_count(&self) -> usize {
        self.components.len()
    }

    /// The `n` highest-weighted words of every topic, heaviest first.
    pub fn top_words(&self, n: usize) -> Vec<Vec<String>> {
        self.components
            .iter()
            .map(|weights| {
                let mut order: Vec<usize> = (0..weights.len()).collect();
                order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));
                order
                    .into_iter()
                    .take(n)
                    .filter_map(|i| self.vocabulary.get(i).cloned())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TopicModel {
        TopicModel {
            vocabulary: vec!["ocean".into(), "code".into(), "fish".into(), "robot".into()],
            components: vec![vec![5.0, 0.1, 3.0, 0.2], vec![0.1, 4.0, 0.3, 6.0]],
        }
    }

    #[test]
    fn test_top_words() {
        let top = model().top_words(2);
        assert_eq!(top[0], vec!["ocean", "fish"]);
        assert_eq!(top[1], vec!["robot", "code"]);
    }

    #[test]
    fn test_top_words_more_than_vocabulary() {
        assert_eq!(model().top_words(10)[0].len(), 4);
    }

    #[test]
    fn test_validate_mismatch() {
        let mut m = model();
        assert!(m.validate().is_ok());
        m.components[1].pop();
        assert_eq!(
            m.validate(),
            Err(ModelError::VocabularyMismatch {
                topic: 1,
                expected: 4,
                actual: 3
            })
        );
    }
}
