// Stop words and punctuation filtering for lemmas.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Talk-specific filler and disfluency words added to the English list.
pub const FILLER_WORDS: [&str; 10] = [
    "yeah", "ya", "ah", "um", "oh", "actually", "literally", "like", "s", "applause",
];

/// The ASCII punctuation characters, in the conventional order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// An immutable stop word set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from an explicit word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add more words, returning the extended set.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    /// The NLTK English stop words from the `stop-words` crate plus
    /// [`FILLER_WORDS`].
    fn default() -> Self {
        let english: Vec<String> = get(LANGUAGE::English);
        Self::from_words(english).with_extra(FILLER_WORDS)
    }
}

/// True when `token` is a substring of [`PUNCTUATION`]. The empty string
/// counts, so a lemma that trims to nothing is dropped too.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.contains(token)
}
