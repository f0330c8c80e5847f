use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Default number of talks in each recommendation list.
pub const DEFAULT_NUM_RECS: usize = 5;

/// Central configuration loaded from environment variables.
///
/// Every artifact path has a default under `./data`. The .env file is
/// loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Talk metadata and transcripts (JSON array of talks)
    pub corpus_path: PathBuf,
    /// Document-topic matrix produced by the LDA model (JSON N×K array)
    pub topics_path: PathBuf,
    /// Topic-word weights and vocabulary (JSON object)
    pub model_path: PathBuf,
    /// Cached token sequences written by `build-tokens`
    pub tokens_path: PathBuf,
    /// How many similar / different talks to recommend
    pub num_recs: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let num_recs = match env::var("TEDTOPICS_NUM_RECS") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => anyhow::bail!("TEDTOPICS_NUM_RECS must be a positive integer, got {raw:?}"),
            },
            Err(_) => DEFAULT_NUM_RECS,
        };

        Ok(Self {
            corpus_path: path_var("TEDTOPICS_CORPUS_PATH", "./data/talks.json"),
            topics_path: path_var("TEDTOPICS_TOPICS_PATH", "./data/doc_topics.json"),
            model_path: path_var("TEDTOPICS_MODEL_PATH", "./data/topic_words.json"),
            tokens_path: path_var("TEDTOPICS_TOKENS_PATH", "./data/tokens.json"),
            num_recs,
        })
    }

    /// Check that the talk corpus exists.
    pub fn require_corpus(&self) -> Result<()> {
        require_file(&self.corpus_path, "TEDTOPICS_CORPUS_PATH", "talk corpus")
    }

    /// Check that the document-topic matrix exists.
    pub fn require_topics(&self) -> Result<()> {
        require_file(&self.topics_path, "TEDTOPICS_TOPICS_PATH", "document-topic matrix")
    }

    /// Check that the topic-word model exists.
    pub fn require_model(&self) -> Result<()> {
        require_file(&self.model_path, "TEDTOPICS_MODEL_PATH", "topic-word model")
    }

    /// Check that the token cache exists. Run `tedtopics build-tokens` to create it.
    pub fn require_tokens(&self) -> Result<()> {
        if !self.tokens_path.exists() {
            anyhow::bail!(
                "Token cache not found at {}\n\
                 Run `tedtopics build-tokens` to create it, or set TEDTOPICS_TOKENS_PATH.",
                self.tokens_path.display()
            );
        }
        Ok(())
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn require_file(path: &Path, var: &str, what: &str) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(
            "The {what} was not found at {}\n\
             Set {var} in your .env file to point at it.",
            path.display()
        );
    }
    Ok(())
}
