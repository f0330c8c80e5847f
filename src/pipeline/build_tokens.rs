// Batch tokenization: run every transcript in the corpus through the
// tokenizer and collect the results row-aligned with the corpus.
//
// This is the offline preprocessing step that feeds the (external)
// vectorizer and topic model, and the token statistics views.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::corpus::{Corpus, TokenizedCorpus};
use crate::tokenizer::Tokenizer;

/// Tokenize every talk, showing a progress bar when `show_progress` is set.
pub fn run(tokenizer: &Tokenizer, corpus: &Corpus, show_progress: bool) -> TokenizedCorpus {
    let pb = if show_progress {
        ProgressBar::new(corpus.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Tokenizing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut documents = Vec::with_capacity(corpus.len());
    let mut empty = 0usize;
    for talk in &corpus.talks {
        let tokens = tokenizer.tokenize_to_vec(&talk.transcript);
        if tokens.is_empty() {
            empty += 1;
        }
        documents.push(tokens);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let total: usize = documents.iter().map(Vec::len).sum();
    info!(
        documents = documents.len(),
        tokens = total,
        empty_documents = empty,
        "Tokenized corpus"
    );

    TokenizedCorpus::new(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Talk;

    fn talk(title: &str, transcript: &str) -> Talk {
        Talk {
            title: title.to_string(),
            transcript: transcript.to_string(),
            ..Talk::default()
        }
    }

    #[test]
    fn test_rows_align_with_corpus() {
        let corpus = Corpus::new(vec![
            talk("a", "Oceans cover the planet."),
            talk("b", ""),
            talk("c", "Robots are learning quickly."),
        ]);
        let tokenized = run(&Tokenizer::default(), &corpus, false);
        assert_eq!(tokenized.len(), 3);
        assert!(tokenized.documents[0].contains(&"ocean".to_string()));
        assert!(tokenized.documents[1].is_empty());
        assert!(tokenized.documents[2].contains(&"robot".to_string()));
    }
}
