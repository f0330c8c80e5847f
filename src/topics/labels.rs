// Human-readable names for the fitted LDA topics.

/// Labels assigned to the 15 topics of the final model, by topic index.
pub const TOPIC_LABELS: [&str; 15] = [
    "General",
    "Science",
    "Tech",
    "Politics",
    "Problems",
    "Personal",
    "AI",
    "Miscellaneous",
    "Healthcare",
    "Linguistics/Humanities",
    "Space",
    "Agriculture/Nature",
    "Gender/Sexuality",
    "Audio/Visual",
    "Urban Planning/Design",
];

/// Topic index -> label, falling back to "Topic N" (1-based) when a model
/// has more topics than labels.
#[derive(Debug, Clone)]
pub struct TopicLabels {
    labels: Vec<String>,
}

impl Default for TopicLabels {
    fn default() -> Self {
        Self::new(TOPIC_LABELS.iter().map(|s| s.to_string()).collect())
    }
}

impl TopicLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn label(&self, topic: usize) -> String {
        self.labels
            .get(topic)
            .cloned()
            .unwrap_or_else(|| format!("Topic {}", topic + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_fallback() {
        let labels = TopicLabels::default();
        assert_eq!(labels.label(0), "General");
        assert_eq!(labels.label(14), "Urban Planning/Design");
        assert_eq!(labels.label(15), "Topic 16");
    }
}
