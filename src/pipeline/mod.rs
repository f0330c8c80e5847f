// Batch pipelines over the whole corpus.

pub mod build_tokens;
