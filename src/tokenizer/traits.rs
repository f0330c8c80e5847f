// Linguistic collaborator traits: swap-ready abstractions.
//
// The tokenizer only needs two things from an NLP toolkit: a part-of-speech
// tag per token and a POS-aware lemma. Keeping them behind traits lets a
// heavier tagger or a dictionary-backed lemmatizer slot in without touching
// the cleanup pipeline.

use std::fmt;

/// Coarse grammatical role of a token (Universal POS style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adverb,
    Adjective,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Auxiliary,
    Particle,
    Interjection,
    Numeral,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// Content-word classes that survive lemma filtering.
    pub fn is_content_word(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adverb | PartOfSpeech::Adjective
        )
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Preposition => "ADP",
            PartOfSpeech::Conjunction => "CONJ",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Interjection => "INTJ",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Punctuation => "PUNCT",
            PartOfSpeech::Other => "X",
        };
        f.write_str(tag)
    }
}

/// A surface token with its assigned part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

/// Splits text into tokens and assigns each a part of speech.
pub trait PosTagger {
    /// Tag already-lowercased, whitespace-normalized text.
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Reduces a word to its dictionary form for a given part of speech.
pub trait Lemmatizer {
    /// Lemmatize `word` as `pos`. Words the lemmatizer has no rule for
    /// come back unchanged.
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String;
}
