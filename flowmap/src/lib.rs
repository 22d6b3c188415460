//! Data analysis for flow maps.
//!
//! A flow map shows weighted movements (migrations, trade, commutes) between
//! geographic locations. Before anything is drawn, the raw flow data has to
//! be summarized and scaled; this crate provides that layer on top of
//! [`flowmap_types`]:
//!
//! * [`data`] — flow records, statistics over value sequences and the
//!   normalizers that map raw values onto visual scales;
//! * [`clustering`] — cosine similarity used to group flows going in similar
//!   directions;
//! * [`filter`] — bag-of-words matching of node labels against a search
//!   query.
//!
//! Invalid arguments (inverted intervals, out-of-range values, mismatched
//! vector dimensions) are reported through [`FlowmapError`]; degenerate
//! numeric inputs such as zero vectors propagate NaN, as callers may
//! legitimately feed sequences containing missing values.

pub mod clustering;
pub mod data;
pub mod error;
pub mod filter;

pub use error::FlowmapError;
