// Dominant / secondary / tertiary topics per talk, and how often those
// ranks co-occur across the corpus.

use serde::Serialize;

use crate::recommend::TopicMatrix;

/// Which of a talk's top three topics to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicRank {
    Dominant,
    Secondary,
    Tertiary,
}

impl TopicRank {
    pub const ALL: [TopicRank; 3] = [TopicRank::Dominant, TopicRank::Secondary, TopicRank::Tertiary];

    pub fn name(self) -> &'static str {
        match self {
            TopicRank::Dominant => "Dominant",
            TopicRank::Secondary => "Secondary",
            TopicRank::Tertiary => "Tertiary",
        }
    }
}

/// A talk's three most prevalent topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopTopics {
    pub dominant: usize,
    pub secondary: usize,
    pub tertiary: usize,
}

impl TopTopics {
    pub fn get(&self, rank: TopicRank) -> usize {
        match rank {
            TopicRank::Dominant => self.dominant,
            TopicRank::Secondary => self.secondary,
            TopicRank::Tertiary => self.tertiary,
        }
    }
}

/// Top three topics of one distribution. `None` when there are fewer than
/// three topics.
///
/// The dominant topic is the first maximum (lowest index on a tie). The
/// secondary and tertiary topics rank equal weights by the higher index
/// first; if the dominant topic lands in one of those slots it is swapped
/// for the highest-index maximum so the three stay distinct.
pub fn top_topics(distribution: &[f64]) -> Option<TopTopics> {
    let dominant = (0..distribution.len()).reduce(|best, i| {
        if distribution[i].total_cmp(&distribution[best]).is_gt() {
            i
        } else {
            best
        }
    })?;

    let mut order: Vec<usize> = (0..distribution.len()).collect();
    order.sort_by(|&a, &b| {
        distribution[b]
            .total_cmp(&distribution[a])
            .then_with(|| b.cmp(&a))
    });
    let distinct = |topic: usize| if topic == dominant { order[0] } else { topic };
    match order[..] {
        [_, secondary, tertiary, ..] => Some(TopTopics {
            dominant,
            secondary: distinct(secondary),
            tertiary: distinct(tertiary),
        }),
        _ => None,
    }
}

/// Top three topics of every row.
pub fn rank_documents(matrix: &TopicMatrix) -> Vec<TopTopics> {
    matrix.rows().filter_map(top_topics).collect()
}

/// How many talks have each topic at `rank`.
pub fn topic_histogram(rankings: &[TopTopics], rank: TopicRank, topics: usize) -> Vec<usize> {
    let mut counts = vec![0; topics];
    for r in rankings {
        if let Some(c) = counts.get_mut(r.get(rank)) {
            *c += 1;
        }
    }
    counts
}

/// `table[i][j]` = number of talks whose `row_rank` topic is `i` and whose
/// `column_rank` topic is `j`.
pub fn cooccurrence(
    rankings: &[TopTopics],
    row_rank: TopicRank,
    column_rank: TopicRank,
    topics: usize,
) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; topics]; topics];
    for r in rankings {
        let (i, j) = (r.get(row_rank), r.get(column_rank));
        if i < topics && j < topics {
            table[i][j] += 1;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_topics_order() {
        let top = top_topics(&[0.1, 0.5, 0.05, 0.35]).unwrap();
        assert_eq!(
            top,
            TopTopics {
                dominant: 1,
                secondary: 3,
                tertiary: 0
            }
        );
    }

    #[test]
    fn test_top_topics_ties() {
        // First maximum wins the dominant slot, the rest prefer higher indices
        let top = top_topics(&[0.25, 0.25, 0.25, 0.25]).unwrap();
        assert_eq!(top.dominant, 0);
        assert_eq!(top.secondary, 2);
        assert_eq!(top.tertiary, 1);
    }

    #[test]
    fn test_top_topics_tied_maximum_stays_distinct() {
        let top = top_topics(&[0.4, 0.4, 0.2]).unwrap();
        assert_eq!(
            top,
            TopTopics {
                dominant: 0,
                secondary: 1,
                tertiary: 2
            }
        );
    }

    #[test]
    fn test_too_few_topics() {
        assert_eq!(top_topics(&[0.5, 0.5]), None);
    }

    #[test]
    fn test_histogram_and_cooccurrence() {
        let matrix = TopicMatrix::new(vec![
            vec![0.6, 0.3, 0.1],
            vec![0.6, 0.1, 0.3],
            vec![0.1, 0.3, 0.6],
        ])
        .unwrap();
        let rankings = rank_documents(&matrix);
        assert_eq!(topic_histogram(&rankings, TopicRank::Dominant, 3), vec![2, 0, 1]);

        let table = cooccurrence(&rankings, TopicRank::Dominant, TopicRank::Secondary, 3);
        assert_eq!(table[0][1], 1);
        assert_eq!(table[0][2], 1);
        assert_eq!(table[2][1], 1);
        let total: usize = table.iter().flatten().sum();
        assert_eq!(total, 3);
    }
}
