// Transcript tokenization: cleanup rules, tagging and lemmatization.

pub mod clean;
pub mod lemma;
pub mod pipeline;
pub mod stopwords;
pub mod tagger;
pub mod traits;

pub use pipeline::{Tokenizer, TokenizerConfig, Tokens};
