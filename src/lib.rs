// tedtopics: topic exploration and recommendations for TED Talk transcripts
//
// This is the library root. The tokenizer and recommender are pure,
// synchronous components; everything else loads artifacts and presents
// their results.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod recommend;
pub mod tokenizer;
pub mod topics;
