//! Text handling for word counting
//!
//! This module contains:
//! - The countable item types (`Word`, `WordPair`) and their shared capability
//! - Segmentation of raw element text into words and adjacent pairs
//! - Stop-word filtering applied before counting

mod item;
mod segment;
mod stop_words;

pub use item::{Countable, Word, WordPair, PAIR_SEPARATOR};
pub use segment::{pair_up, segment};
pub use stop_words::{StopWords, ENGLISH_STOP_WORDS};
