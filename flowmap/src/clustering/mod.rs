//! Similarity measures used to group flows.

mod cosine;

pub use cosine::{cosine, dot, magnitude};
