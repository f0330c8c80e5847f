// Unit tests for topic labels, top words and topic rank statistics.

use tedtopics::recommend::TopicMatrix;
use tedtopics::topics::labels::{TopicLabels, TOPIC_LABELS};
use tedtopics::topics::model::TopicModel;
use tedtopics::topics::ranking::{
    cooccurrence, rank_documents, top_topics, topic_histogram, TopicRank,
};

#[test]
fn fifteen_labels_in_topic_order() {
    let labels = TopicLabels::default();
    assert_eq!(TOPIC_LABELS.len(), 15);
    assert_eq!(labels.label(6), "AI");
    assert_eq!(labels.label(10), "Space");
}

#[test]
fn custom_labels_fall_back_to_numbers() {
    let labels = TopicLabels::new(vec!["Only".to_string()]);
    assert_eq!(labels.label(0), "Only");
    assert_eq!(labels.label(1), "Topic 2");
}

#[test]
fn top_words_from_json_model() {
    let model: TopicModel = serde_json::from_str(
        r#"{
            "vocabulary": ["brain", "cell", "city", "street", "park"],
            "components": [
                [9.0, 7.0, 0.1, 0.2, 0.3],
                [0.1, 0.2, 8.0, 6.0, 5.0]
            ]
        }"#,
    )
    .unwrap();
    model.validate().unwrap();
    assert_eq!(model.topic_count(), 2);
    let top = model.top_words(3);
    assert_eq!(top[0], vec!["brain", "cell", "park"]);
    assert_eq!(top[1], vec!["city", "street", "park"]);
}

#[test]
fn top_three_topics_per_document() {
    let top = top_topics(&[0.05, 0.1, 0.6, 0.05, 0.2]).unwrap();
    assert_eq!(top.get(TopicRank::Dominant), 2);
    assert_eq!(top.get(TopicRank::Secondary), 4);
    assert_eq!(top.get(TopicRank::Tertiary), 1);
}

#[test]
fn histograms_sum_to_document_count() {
    let matrix = TopicMatrix::new(vec![
        vec![0.7, 0.2, 0.1, 0.0],
        vec![0.1, 0.7, 0.2, 0.0],
        vec![0.1, 0.2, 0.7, 0.0],
        vec![0.0, 0.1, 0.2, 0.7],
        vec![0.7, 0.0, 0.1, 0.2],
    ])
    .unwrap();
    let rankings = rank_documents(&matrix);
    assert_eq!(rankings.len(), 5);

    for rank in TopicRank::ALL {
        let counts = topic_histogram(&rankings, rank, matrix.topics());
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }
    assert_eq!(
        topic_histogram(&rankings, TopicRank::Dominant, 4),
        vec![2, 1, 1, 1]
    );
}

#[test]
fn cooccurrence_never_pairs_a_topic_with_itself() {
    let matrix = TopicMatrix::new(vec![
        vec![0.5, 0.3, 0.2],
        vec![0.2, 0.5, 0.3],
        vec![0.3, 0.2, 0.5],
    ])
    .unwrap();
    let rankings = rank_documents(&matrix);
    for (a, b) in [
        (TopicRank::Dominant, TopicRank::Secondary),
        (TopicRank::Dominant, TopicRank::Tertiary),
        (TopicRank::Secondary, TopicRank::Tertiary),
    ] {
        let table = cooccurrence(&rankings, a, b, 3);
        for (i, row) in table.iter().enumerate() {
            assert_eq!(row[i], 0);
        }
        assert_eq!(table.iter().flatten().sum::<usize>(), 3);
    }
}
