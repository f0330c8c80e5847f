// Talk records and JSON artifact loading.
//
// Scraping, model fitting and serialization happen upstream; this module
// only reads what they produced.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read and deserialize a JSON artifact.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CorpusError> {
    let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as JSON and write it to `path`.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CorpusError> {
    let json = serde_json::to_string(value).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// One TED talk with its metadata and transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Recording date as `YYYY-MM-DD`
    #[serde(default)]
    pub recorded_date: Option<String>,
    /// Upload date, `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    pub uploaded_date: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: Option<u64>,
    /// Running time in seconds
    #[serde(default)]
    pub duration: Option<u64>,
}

impl Talk {
    pub fn recorded_on(&self) -> Option<NaiveDate> {
        self.recorded_date.as_deref().and_then(parse_date)
    }

    pub fn uploaded_on(&self) -> Option<NaiveDate> {
        self.uploaded_date.as_deref().and_then(parse_date)
    }

    /// Year the talk was recorded, when the date is present and parses.
    pub fn recorded_year(&self) -> Option<i32> {
        self.recorded_on().map(|d| d.year())
    }

    /// Days between recording and upload. Negative when the upload date
    /// precedes the recording date, which happens in scraped metadata.
    pub fn upload_lag_days(&self) -> Option<i64> {
        Some((self.uploaded_on()? - self.recorded_on()?).num_days())
    }

    /// Number of whitespace-separated words in the raw transcript.
    pub fn word_count(&self) -> usize {
        self.transcript.split_whitespace().count()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// All talks, in the same row order as the topic matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pub talks: Vec<Talk>,
}

impl Corpus {
    pub fn new(talks: Vec<Talk>) -> Self {
        Self { talks }
    }

    /// Load the talk list from a JSON array.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let corpus: Corpus = load_json(path)?;
        info!(talks = corpus.len(), path = %path.display(), "Loaded corpus");
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Talk> {
        self.talks.get(index)
    }

    pub fn titles(&self) -> Vec<String> {
        self.talks.iter().map(|t| t.title.clone()).collect()
    }
}
