// Content-based talk recommendations from LDA topic distributions.

pub mod catalog;
pub mod divergence;
pub mod error;
pub mod matrix;
pub mod ranking;

pub use catalog::{find_title, Recommendation, Recommender};
pub use error::RecommendError;
pub use matrix::TopicMatrix;
pub use ranking::{most_different, most_similar, Neighbor, QueryOrigin};
