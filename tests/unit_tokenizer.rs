// Unit tests for the transcript tokenizer.
//
// Covers the cleanup stages on adversarial scraped-transcript input and
// the exclusion guarantees of the final token sequence.

use tedtopics::tokenizer::clean::{
    add_spaces, clean_transcript, handle_numbers, normalize_whitespace, remove_parentheticals,
};
use tedtopics::tokenizer::stopwords::{is_punctuation, StopWords, FILLER_WORDS};
use tedtopics::tokenizer::traits::{Lemmatizer, PartOfSpeech, PosTagger, TaggedToken};
use tedtopics::tokenizer::{Tokenizer, TokenizerConfig};

const TRANSCRIPT: &str = "Thank you so much, Chris.(Applause) It's truly a great honor... \
    I've been blown away by this conference.(Laughter) In 2,006, we had 1,234,567 \
    visitors -- a 10-year record — and R&D? No: R and D budgets grew. ♪ la la ♫ \
    \"Really,\" she said, \"the oceans are dying!!The reefs too.\"";

// ============================================================
// Cleanup stages
// ============================================================

#[test]
fn applause_with_period_fully_removed() {
    assert_eq!(remove_parentheticals("(Applause.) Thank you."), "Thank you.");
}

#[test]
fn parenthetical_between_fused_sentences() {
    let out = remove_parentheticals("that was it.(Laughter)So then");
    assert_eq!(out, "that was it. So then");
}

#[test]
fn unbalanced_stage_directions_leave_no_tokens() {
    let cleaned = remove_parentheticals("Thanks (Applause. (Laughter) Next");
    assert!(!cleaned.contains("Laughter"), "{cleaned}");
    let tokens = Tokenizer::default().tokenize_to_vec("Thanks (Applause. (Laughter) Next");
    assert!(!tokens.iter().any(|t| t == "laughter" || t == "applause"));
}

#[test]
fn double_punctuation_gets_space_before_word() {
    assert_eq!(
        add_spaces("This is great!!The weather is nice."),
        "This is great!! The weather is nice."
    );
}

#[test]
fn multi_group_thousands_separators() {
    assert_eq!(
        handle_numbers("The cost was 1,234,567 dollars."),
        "The cost was 1234567 dollars."
    );
    assert_eq!(handle_numbers("7,000,000,000 people"), "7000000000 people");
}

#[test]
fn cleaned_transcript_has_no_artifacts() {
    let cleaned = clean_transcript(TRANSCRIPT);
    for artifact in ["(", ")", "...", "♪", "♫", "—", "\"", "R and D"] {
        assert!(!cleaned.contains(artifact), "found {artifact:?} in {cleaned}");
    }
    assert!(cleaned.contains("1234567"));
    assert!(cleaned.contains("research and development"));
    assert!(cleaned.contains("dying!! The reefs"));
    assert_eq!(cleaned, cleaned.trim());
    assert!(!cleaned.contains("  "));
}

#[test]
fn whitespace_normalization_idempotent() {
    for input in ["", " a ", "a\n\n b\t\tc", "  spaced   out  text  "] {
        let once = normalize_whitespace(input);
        assert_eq!(normalize_whitespace(&once), once);
    }
}

// ============================================================
// Token sequence guarantees
// ============================================================

#[test]
fn tokens_never_contain_stop_words_or_punctuation() {
    let tokenizer = Tokenizer::default();
    let stop = StopWords::default();
    let tokens = tokenizer.tokenize_to_vec(TRANSCRIPT);
    assert!(!tokens.is_empty());
    for token in &tokens {
        assert!(!token.is_empty());
        assert!(!stop.contains(token), "stop word {token:?} leaked");
        assert!(!is_punctuation(token), "punctuation {token:?} leaked");
        assert_eq!(token, &token.to_lowercase());
    }
    for filler in FILLER_WORDS {
        assert!(!tokens.iter().any(|t| t == filler));
    }
}

#[test]
fn tokens_keep_order_and_duplicates() {
    let tokenizer = Tokenizer::default();
    let tokens = tokenizer.tokenize_to_vec("Oceans feed oceans. Forests feed forests.");
    let oceans = tokens.iter().filter(|t| *t == "ocean").count();
    let forests = tokens.iter().filter(|t| *t == "forest").count();
    assert_eq!(oceans, 2);
    assert_eq!(forests, 2);

    let first_forest = tokens.iter().position(|t| t == "forest").unwrap();
    let last_ocean = tokens.iter().rposition(|t| t == "ocean").unwrap();
    assert!(last_ocean < first_forest);
}

#[test]
fn expanded_domain_literal_survives_as_tokens() {
    let tokens = Tokenizer::default()
        .tokenize_to_vec("Our R and D budget funds research on world problems and new systems.");
    for word in ["research", "development", "budget", "world", "problem", "system"] {
        assert!(tokens.iter().any(|t| t == word), "missing {word} in {tokens:?}");
    }
    assert_eq!(tokens.iter().filter(|t| *t == "research").count(), 2);
}

#[test]
fn common_content_words_are_kept() {
    let tokens = Tokenizer::default().tokenize_to_vec("Scientists are running important experiments.");
    assert_eq!(tokens, vec!["scientist", "run", "important", "experiment"]);
}

#[test]
fn whitespace_only_transcript_is_empty() {
    assert!(Tokenizer::default().tokenize_to_vec(" \n\t ").is_empty());
}

#[test]
fn tokens_iterator_is_lazy_and_finite() {
    let tokenizer = Tokenizer::default();
    let mut tokens = tokenizer.tokenize("Oceans and forests and rivers");
    assert_eq!(tokens.next().as_deref(), Some("ocean"));
    assert_eq!(tokens.count(), 2);
}

// ============================================================
// Injected collaborators
// ============================================================

/// Tags every whitespace token as a noun.
struct AllNouns;

impl PosTagger for AllNouns {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(|w| TaggedToken {
                text: w.to_string(),
                pos: PartOfSpeech::Noun,
            })
            .collect()
    }
}

/// Returns the word upper-cased, to prove lemmas are lowercased after.
struct Shouting;

impl Lemmatizer for Shouting {
    fn lemmatize(&self, word: &str, _pos: PartOfSpeech) -> String {
        format!("  {}  ", word.to_uppercase())
    }
}

#[test]
fn custom_tagger_and_lemmatizer() {
    let tokenizer = Tokenizer::new(TokenizerConfig {
        stop_words: StopWords::from_words(["the"]),
        tagger: Box::new(AllNouns),
        lemmatizer: Box::new(Shouting),
    });
    let tokens = tokenizer.tokenize_to_vec("The Quick fox");
    assert_eq!(tokens, vec!["quick", "fox"]);
}

#[test]
fn non_content_tags_dropped_before_lemmatization() {
    struct AllDeterminers;
    impl PosTagger for AllDeterminers {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            text.split_whitespace()
                .map(|w| TaggedToken {
                    text: w.to_string(),
                    pos: PartOfSpeech::Determiner,
                })
                .collect()
        }
    }

    let tokenizer = Tokenizer::new(TokenizerConfig {
        tagger: Box::new(AllDeterminers),
        ..TokenizerConfig::default()
    });
    assert!(tokenizer.tokenize_to_vec("planets galaxies stars").is_empty());
}
