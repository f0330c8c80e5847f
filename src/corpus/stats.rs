// Token statistics over a tokenized corpus: the counts behind the
// exploratory views (corpus occurrences, document occurrences, by year).

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::talk::Corpus;

/// Token -> count.
pub type Frequencies = HashMap<String, usize>;

/// Tokens below this count go in the "rare" bucket of the histograms.
pub const DEFAULT_SPLIT_THRESHOLD: usize = 100;

/// Token sequences for every talk, row-aligned with the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizedCorpus {
    pub documents: Vec<Vec<String>>,
}

impl TokenizedCorpus {
    pub fn new(documents: Vec<Vec<String>>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total occurrences of each token across all documents.
    pub fn corpus_frequencies(&self) -> Frequencies {
        count(self.documents.iter().flatten())
    }

    /// Number of documents each token appears in.
    pub fn document_frequencies(&self) -> Frequencies {
        let mut freqs = Frequencies::new();
        for doc in &self.documents {
            let distinct: HashSet<&String> = doc.iter().collect();
            for token in distinct {
                *freqs.entry(token.clone()).or_insert(0) += 1;
            }
        }
        freqs
    }

    /// Number of distinct tokens in each document.
    pub fn distinct_counts(&self) -> Vec<usize> {
        self.documents
            .iter()
            .map(|doc| doc.iter().collect::<HashSet<_>>().len())
            .collect()
    }

    /// Token occurrences grouped by the year each talk was recorded.
    /// Talks without a parseable date are skipped.
    pub fn frequencies_by_year(&self, corpus: &Corpus) -> BTreeMap<i32, Frequencies> {
        let mut by_year: BTreeMap<i32, Frequencies> = BTreeMap::new();
        for (doc, talk) in self.documents.iter().zip(&corpus.talks) {
            let Some(year) = talk.recorded_year() else {
                continue;
            };
            let freqs = by_year.entry(year).or_default();
            for token in doc {
                *freqs.entry(token.clone()).or_insert(0) += 1;
            }
        }
        by_year
    }
}

fn count<'a>(tokens: impl Iterator<Item = &'a String>) -> Frequencies {
    let mut freqs = Frequencies::new();
    for token in tokens {
        *freqs.entry(token.clone()).or_insert(0) += 1;
    }
    freqs
}

/// Split counts into (below threshold, at or above threshold).
pub fn split_by_threshold(freqs: &Frequencies, threshold: usize) -> (Frequencies, Frequencies) {
    freqs
        .iter()
        .map(|(token, &n)| (token.clone(), n))
        .partition(|(_, n)| *n < threshold)
}

/// Tokens ranked by descending count (ties alphabetical), restricted to the
/// 1-based inclusive rank window `from..=to`.
pub fn ranked(freqs: &Frequencies, from: usize, to: usize) -> Vec<(String, usize)> {
    let mut all: Vec<(&String, usize)> = freqs.iter().map(|(t, &n)| (t, n)).collect();
    all.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let start = from.max(1) - 1;
    let take = (to + 1).saturating_sub(from.max(1));
    all.into_iter()
        .skip(start)
        .take(take)
        .map(|(t, n)| (t.clone(), n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> TokenizedCorpus {
        TokenizedCorpus::new(vec![
            vec!["ocean".into(), "fish".into(), "ocean".into()],
            vec!["ocean".into(), "city".into()],
            vec![],
        ])
    }

    #[test]
    fn test_corpus_and_document_frequencies() {
        let tc = docs();
        let corpus = tc.corpus_frequencies();
        assert_eq!(corpus["ocean"], 3);
        assert_eq!(corpus["fish"], 1);

        let documents = tc.document_frequencies();
        assert_eq!(documents["ocean"], 2);
        assert_eq!(documents["city"], 1);
    }

    #[test]
    fn test_distinct_counts() {
        assert_eq!(docs().distinct_counts(), vec![2, 2, 0]);
    }

    #[test]
    fn test_ranked_window() {
        let freqs = docs().corpus_frequencies();
        let top = ranked(&freqs, 1, 2);
        assert_eq!(top, vec![("ocean".to_string(), 3), ("city".to_string(), 1)]);
        assert_eq!(ranked(&freqs, 3, 3), vec![("fish".to_string(), 1)]);
        assert!(ranked(&freqs, 5, 10).is_empty());
        assert!(ranked(&freqs, 3, 2).is_empty());
    }

    #[test]
    fn test_split_by_threshold() {
        let freqs = docs().corpus_frequencies();
        let (rare, common) = split_by_threshold(&freqs, 2);
        assert_eq!(rare.len(), 2);
        assert_eq!(common.len(), 1);
        assert_eq!(common["ocean"], 3);
    }
}
