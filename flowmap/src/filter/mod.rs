//! Filtering of nodes and flows by their text attributes.

mod bag_of_words;

pub use bag_of_words::{word_groups, words, BagOfWordsFilter};
