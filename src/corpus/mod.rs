// Talk corpus: metadata, transcripts and token statistics.

pub mod overview;
pub mod stats;
pub mod talk;

pub use stats::TokenizedCorpus;
pub use talk::{Corpus, CorpusError, Talk};
