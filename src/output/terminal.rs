// Colored terminal output for token rankings, topic views and
// recommendations. main.rs hands data in; nothing here computes.

use std::collections::BTreeMap;

use colored::Colorize;

use super::{truncate_chars, weight_bar};
use crate::corpus::overview::{Engagement, Linguistic, Summary, Temporal};
use crate::corpus::Corpus;
use crate::recommend::{Neighbor, Recommendation};
use crate::topics::labels::TopicLabels;
use crate::topics::ranking::TopicRank;

const BAR_WIDTH: usize = 20;

/// Print one transcript's token sequence.
pub fn display_tokens(tokens: &[String]) {
    if tokens.is_empty() {
        println!("{}", "No tokens survived cleanup and filtering.".dimmed());
        return;
    }
    println!("{}", format!("=== {} tokens ===", tokens.len()).bold());
    println!("{}", tokens.join(" "));
}

/// Print a ranked token window starting at 1-based rank `from`.
pub fn display_ranked_tokens(heading: &str, ranked: &[(String, usize)], from: usize) {
    println!("\n{}", format!("=== {heading} ===").bold());
    if ranked.is_empty() {
        println!("  {}", "No tokens in this range.".dimmed());
        return;
    }

    println!("  {:>6}  {:<24} {:>10}", "Rank".dimmed(), "Token".dimmed(), "Count".dimmed());
    println!("  {}", "-".repeat(44).dimmed());
    for (offset, (token, count)) in ranked.iter().enumerate() {
        println!("  {:>6}. {:<24} {:>10}", from.max(1) + offset, token, count);
    }
}

/// Print a talk's topic distribution as a bar chart, heaviest topic first.
pub fn display_topic_distribution(
    index: usize,
    corpus: &Corpus,
    distribution: &[f64],
    labels: &TopicLabels,
) {
    let title = corpus.get(index).map(|t| t.title.as_str()).unwrap_or("?");
    println!(
        "\n{}",
        format!("=== Topic distribution for talk #{}: {} ===", index + 1, title).bold()
    );
    println!();

    let mut order: Vec<usize> = (0..distribution.len()).collect();
    order.sort_by(|&a, &b| distribution[b].total_cmp(&distribution[a]));

    for topic in order {
        let weight = distribution[topic];
        let bar = weight_bar(weight, BAR_WIDTH);
        let colored_bar = if weight >= 0.25 {
            bar.bright_green()
        } else if weight >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };
        println!("  {:<24} {} {:.3}", labels.label(topic), colored_bar, weight);
    }

    if let Some(talk) = corpus.get(index) {
        if !talk.summary.is_empty() {
            println!("\n{}", "SUMMARY:".bold());
            println!("  {}", talk.summary);
        }
        if !talk.tags.is_empty() {
            println!("\n{}", "CURRENT TED TAGS:".bold());
            println!("  {}", talk.tags.join(", ").dimmed());
        }
    }
}

/// Print the most similar and most different talks for a query.
pub fn display_recommendation(rec: &Recommendation, corpus: &Corpus, labels: &TopicLabels) {
    display_topic_distribution(rec.index, corpus, &rec.distribution, labels);

    println!("\n{}", "MOST SIMILAR TALKS".bright_green().bold());
    display_neighbors(&rec.most_similar, corpus);

    println!("\n{}", "MOST DIFFERENT TALKS".bright_red().bold());
    display_neighbors(&rec.most_different, corpus);
}

fn display_neighbors(neighbors: &[Neighbor], corpus: &Corpus) {
    for (i, n) in neighbors.iter().enumerate() {
        let (title, url) = corpus
            .get(n.index)
            .map(|t| (t.title.as_str(), t.url.as_str()))
            .unwrap_or(("?", ""));
        println!(
            "  {:>2}. {:<60} {}",
            i + 1,
            truncate_chars(title, 57),
            format!("JS {:.4}", n.distance).dimmed()
        );
        if !url.is_empty() {
            println!("      {}", url.dimmed());
        }
    }
}

/// Print the top words of every topic next to its label.
pub fn display_top_words(top_words: &[Vec<String>], labels: &TopicLabels) {
    println!("\n{}", "=== LDA topics ===".bold());
    for (topic, words) in top_words.iter().enumerate() {
        println!("  {:>2}. {:<24} {}", topic + 1, labels.label(topic).bold(), words.join(", ").dimmed());
    }
}

/// Print how often each topic is dominant, secondary and tertiary.
pub fn display_topic_histogram(counts: &[(TopicRank, Vec<usize>)], labels: &TopicLabels, total: usize) {
    println!("\n{}", "=== Most prevalent topics ===".bold());
    for (rank, per_topic) in counts {
        println!("\n  {}", format!("{} topic", rank.name()).bold());
        for (topic, &n) in per_topic.iter().enumerate() {
            let share = if total > 0 { n as f64 / total as f64 } else { 0.0 };
            println!(
                "    {:<24} {} {:>5} ({:.1}%)",
                labels.label(topic),
                weight_bar(share, BAR_WIDTH).bright_blue(),
                n,
                share * 100.0
            );
        }
    }
}

/// Print a co-occurrence table as "row topic -> column topic: count" lines,
/// skipping empty cells.
pub fn display_cooccurrence(
    table: &[Vec<usize>],
    row_rank: TopicRank,
    column_rank: TopicRank,
    labels: &TopicLabels,
) {
    println!(
        "\n{}",
        format!("=== Co-occurrence: {} vs {} ===", row_rank.name(), column_rank.name()).bold()
    );
    for (i, row) in table.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(j, n)| format!("{} {}", labels.label(j), n))
            .collect();
        if cells.is_empty() {
            continue;
        }
        println!("  {:<24} {}", labels.label(i).bold(), cells.join(", ").dimmed());
    }
}

fn display_summary(name: &str, unit: &str, summary: Option<Summary>) {
    let Some(s) = summary else {
        println!("  {:<28} {}", name, "no data".dimmed());
        return;
    };
    println!(
        "  {:<28} n = {:<6} min {:.1}  median {:.1}  mean {:.1}  max {:.1} {}",
        name,
        s.count,
        s.min,
        s.median,
        s.mean,
        s.max,
        unit.dimmed()
    );
}

fn display_year_counts(name: &str, counts: &BTreeMap<i32, usize>) {
    let total: usize = counts.values().sum();
    println!("\n  {}", format!("{name} (n = {total})").bold());
    let max = counts.values().copied().max().unwrap_or(0);
    for (year, &n) in counts {
        let share = if max > 0 { n as f64 / max as f64 } else { 0.0 };
        println!("    {year}  {} {:>5}", weight_bar(share, BAR_WIDTH).bright_blue(), n);
    }
}

/// Print the audience engagement view: views and comments.
pub fn display_engagement(engagement: &Engagement) {
    println!("\n{}", "=== Audience engagement ===".bold());
    display_summary("Views", "", engagement.views);
    display_summary("Log(views)", "", engagement.log_views);
    display_summary("Comments", "", engagement.comments);
}

/// Print the linguistic view: transcript length, tags and distinct tokens.
pub fn display_linguistic(linguistic: &Linguistic) {
    println!("\n{}", "=== Linguistic ===".bold());
    display_summary("Transcript word count", "words", linguistic.word_count);
    display_summary("TED tags per talk", "tags", linguistic.tags_per_talk);
    display_summary("Distinct tokens per talk", "tokens", linguistic.distinct_tokens);
}

/// Print the temporal view: duration, recording and upload years, upload lag.
pub fn display_temporal(temporal: &Temporal) {
    println!("\n{}", "=== Temporal ===".bold());
    display_summary("Duration", "minutes", temporal.duration_minutes);
    display_summary("Upload lag", "days", temporal.upload_lag_days);
    display_year_counts("Recorded", &temporal.recorded_by_year);
    display_year_counts("Uploaded", &temporal.uploaded_by_year);
}
