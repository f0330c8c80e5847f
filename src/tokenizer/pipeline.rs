// Transcript tokenizer: cleanup, tagging, lemma filtering, stop word removal.
//
// Cleanup and tagging run eagerly when `tokenize` is called; lemmatization
// and filtering happen lazily as the returned iterator is consumed, so a
// caller that only needs the first few tokens (or only a count) pays for
// nothing else.

use tracing::debug;

use super::clean::clean_transcript;
use super::lemma::MorphyLemmatizer;
use super::stopwords::{is_punctuation, StopWords};
use super::tagger::LexiconTagger;
use super::traits::{Lemmatizer, PosTagger, TaggedToken};

/// The linguistic resources a tokenizer needs, built once and passed in.
pub struct TokenizerConfig {
    pub stop_words: StopWords,
    pub tagger: Box<dyn PosTagger + Send + Sync>,
    pub lemmatizer: Box<dyn Lemmatizer + Send + Sync>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::default(),
            tagger: Box::new(LexiconTagger::new()),
            lemmatizer: Box::new(MorphyLemmatizer::new()),
        }
    }
}

/// Turns raw transcripts into sequences of lemmatized content words.
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize one transcript. Empty or whitespace-only input yields an
    /// empty sequence; malformed input never fails.
    pub fn tokenize(&self, transcript: &str) -> Tokens<'_> {
        let cleaned = clean_transcript(transcript).to_lowercase();
        let tagged = self.config.tagger.tag(&cleaned);
        debug!(
            chars = transcript.len(),
            tagged = tagged.len(),
            "Tagged transcript"
        );
        Tokens {
            tagged: tagged.into_iter(),
            config: &self.config,
        }
    }

    /// Tokenize one transcript into an owned vector.
    pub fn tokenize_to_vec(&self, transcript: &str) -> Vec<String> {
        self.tokenize(transcript).collect()
    }
}

/// Lazily lemmatized token sequence for one transcript.
pub struct Tokens<'a> {
    tagged: std::vec::IntoIter<TaggedToken>,
    config: &'a TokenizerConfig,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for token in self.tagged.by_ref() {
            if !token.pos.is_content_word() {
                continue;
            }
            let lemma = self
                .config
                .lemmatizer
                .lemmatize(token.text.to_lowercase().trim(), token.pos)
                .to_lowercase()
                .trim()
                .to_string();
            if self.config.stop_words.contains(&lemma) || is_punctuation(&lemma) {
                continue;
            }
            return Some(lemma);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.tagged.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize("   \n  ").count(), 0);
    }

    #[test]
    fn test_content_words_lemmatized() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize_to_vec("The scientists were studying dangerous planets.");
        assert_eq!(tokens, vec!["scientist", "study", "dangerous", "planet"]);
    }

    #[test]
    fn test_stage_directions_and_fillers_dropped() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize_to_vec("(Applause.) Um, yeah, oceans matter. (Laughter)");
        assert!(!tokens.iter().any(|t| t == "applause" || t == "laughter"));
        assert!(!tokens.iter().any(|t| t == "um" || t == "yeah"));
        assert!(tokens.contains(&"ocean".to_string()));
    }

    #[test]
    fn test_custom_stop_words_injected() {
        let config = TokenizerConfig {
            stop_words: StopWords::from_words(["ocean"]),
            ..TokenizerConfig::default()
        };
        let tokenizer = Tokenizer::new(config);
        let tokens = tokenizer.tokenize_to_vec("oceans and forests");
        assert_eq!(tokens, vec!["forest"]);
    }
}
