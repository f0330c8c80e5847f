// Topic model views: labels, top words, and per-talk topic rankings.

pub mod labels;
pub mod model;
pub mod ranking;
