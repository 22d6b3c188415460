//! Flow records, statistics over value sequences and normalization of values
//! onto visual scales.

mod flow;
mod normalizer;
mod seq_stat;

pub use flow::{length_stats, weight_stats, Flow};
pub use normalizer::Normalizer;
pub use seq_stat::SeqStat;
