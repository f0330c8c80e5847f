// Corpus-level feature summaries: audience engagement, linguistic and
// temporal views over every talk that has a value for the feature.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use super::stats::TokenizedCorpus;
use super::talk::{Corpus, Talk};

/// Summary statistics of one numeric feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Talks with a value for the feature
    pub count: usize,
    pub min: f64,
    pub median: f64,
    pub mean: f64,
    pub max: f64,
}

impl Summary {
    /// `None` when no talk has a value.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            min: sorted[0],
            median,
            mean: sorted.iter().sum::<f64>() / count as f64,
            max: sorted[count - 1],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engagement {
    pub views: Option<Summary>,
    /// Natural log of view counts, zero-view talks excluded
    pub log_views: Option<Summary>,
    pub comments: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Linguistic {
    /// Words per transcript, talks without a transcript excluded
    pub word_count: Option<Summary>,
    pub tags_per_talk: Option<Summary>,
    /// Distinct tokens per talk, when a token cache is available
    pub distinct_tokens: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Temporal {
    pub duration_minutes: Option<Summary>,
    pub recorded_by_year: BTreeMap<i32, usize>,
    pub uploaded_by_year: BTreeMap<i32, usize>,
    /// Days from recording to upload; negative lags are dropped as bad data
    pub upload_lag_days: Option<Summary>,
}

fn summarize<F>(corpus: &Corpus, value: F) -> Option<Summary>
where
    F: Fn(&Talk) -> Option<f64>,
{
    let values: Vec<f64> = corpus.talks.iter().filter_map(value).collect();
    Summary::of(&values)
}

pub fn engagement(corpus: &Corpus) -> Engagement {
    Engagement {
        views: summarize(corpus, |t| Some(t.views as f64)),
        log_views: summarize(corpus, |t| (t.views > 0).then(|| (t.views as f64).ln())),
        comments: summarize(corpus, |t| t.comments.map(|c| c as f64)),
    }
}

pub fn linguistic(corpus: &Corpus, tokens: Option<&TokenizedCorpus>) -> Linguistic {
    let distinct_tokens = tokens.and_then(|tokens| {
        let counts: Vec<f64> = tokens.distinct_counts().into_iter().map(|n| n as f64).collect();
        Summary::of(&counts)
    });

    Linguistic {
        word_count: summarize(corpus, |t| {
            let words = t.word_count();
            (words > 0).then_some(words as f64)
        }),
        tags_per_talk: summarize(corpus, |t| Some(t.tags.len() as f64)),
        distinct_tokens,
    }
}

pub fn temporal(corpus: &Corpus) -> Temporal {
    Temporal {
        duration_minutes: summarize(corpus, |t| t.duration.map(|secs| secs as f64 / 60.0)),
        recorded_by_year: count_years(corpus.talks.iter().filter_map(Talk::recorded_year)),
        uploaded_by_year: count_years(
            corpus
                .talks
                .iter()
                .filter_map(|t| t.uploaded_on().map(|d| d.year())),
        ),
        upload_lag_days: summarize(corpus, |t| {
            t.upload_lag_days()
                .filter(|&days| days >= 0)
                .map(|days| days as f64)
        }),
    }
}

fn count_years(years: impl Iterator<Item = i32>) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for year in years {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_odd_and_even() {
        let odd = Summary::of(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(odd.count, 3);
        assert_eq!(odd.min, 1.0);
        assert_eq!(odd.median, 2.0);
        assert_eq!(odd.max, 3.0);
        assert_eq!(odd.mean, 2.0);

        let even = Summary::of(&[4.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(even.median, 2.5);
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn test_engagement_skips_missing_comments_and_zero_views() {
        let corpus = Corpus::new(vec![
            Talk {
                views: 100,
                comments: Some(10),
                ..Talk::default()
            },
            Talk {
                views: 0,
                ..Talk::default()
            },
        ]);
        let e = engagement(&corpus);
        assert_eq!(e.views.unwrap().count, 2);
        assert_eq!(e.log_views.unwrap().count, 1);
        let comments = e.comments.unwrap();
        assert_eq!((comments.count, comments.max), (1, 10.0));
    }

    #[test]
    fn test_temporal_drops_negative_lag() {
        let corpus = Corpus::new(vec![
            Talk {
                recorded_date: Some("2012-01-01".into()),
                uploaded_date: Some("2012-01-11".into()),
                duration: Some(900),
                ..Talk::default()
            },
            Talk {
                recorded_date: Some("2013-05-01".into()),
                uploaded_date: Some("2013-04-01".into()),
                ..Talk::default()
            },
        ]);
        let t = temporal(&corpus);
        assert_eq!(t.duration_minutes.unwrap().mean, 15.0);
        assert_eq!(t.recorded_by_year.get(&2012), Some(&1));
        assert_eq!(t.uploaded_by_year.get(&2013), Some(&1));
        let lag = t.upload_lag_days.unwrap();
        assert_eq!((lag.count, lag.max), (1, 10.0));
    }
}
