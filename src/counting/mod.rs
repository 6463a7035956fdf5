//! Frequency counting
//!
//! This module contains the ranked frequency store, which keeps counts and a
//! count-ordered index in step so that "top N" never sorts at read time, and
//! the aggregation service that owns one store for words and one for word
//! pairs.

mod aggregation;
mod store;

pub use aggregation::WordCounts;
pub use store::{Frequency, FrequencyStore, RankedEntry};
