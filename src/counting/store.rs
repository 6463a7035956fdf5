//! Ranked frequency store
//!
//! The store holds two collections for one item kind:
//!
//! - a map from canonical item to its current count, used to find the
//!   previous count of an item in O(1);
//! - an ordered set of `(count descending, entry)` tuples, so the highest
//!   counts are always at the front.
//!
//! Every update moves an item's tuple from its old count to its new count.
//! Both collections sit behind a single lock, so a reader never observes one
//! updated without the other.

use crate::text::Countable;
use parking_lot::Mutex;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, HashMap};

/// An item paired with its final count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency<T> {
    /// The item as last written
    pub item: T,

    /// Number of occurrences across all case variants
    pub count: usize,
}

/// Canonical item paired with its original-case spelling
///
/// Equality and ordering look at the canonical form only, which makes the
/// entry for an item findable regardless of which spelling was recorded.
#[derive(Debug, Clone)]
pub struct RankedEntry<T> {
    canonical: T,
    original: T,
}

impl<T> RankedEntry<T> {
    pub fn new(canonical: T, original: T) -> Self {
        Self {
            canonical,
            original,
        }
    }

    pub fn canonical(&self) -> &T {
        &self.canonical
    }

    pub fn original(&self) -> &T {
        &self.original
    }
}

impl<T: Ord> PartialEq for RankedEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl<T: Ord> Eq for RankedEntry<T> {}

impl<T: Ord> PartialOrd for RankedEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for RankedEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

struct Ranking<T> {
    counts: HashMap<T, usize>,
    ranked: BTreeSet<(Reverse<usize>, RankedEntry<T>)>,
}

impl<T: Countable> Ranking<T> {
    fn new() -> Self {
        Self {
            counts: HashMap::new(),
            ranked: BTreeSet::new(),
        }
    }

    fn record(&mut self, item: T) {
        let canonical = item.canonical();

        let count = self.counts.entry(canonical.clone()).or_insert(0);
        let previous = *count;
        *count += 1;
        let current = *count;

        let mut key = (Reverse(previous), RankedEntry::new(canonical, item));
        if previous > 0 {
            self.ranked.remove(&key);
        }
        key.0 = Reverse(current);
        self.ranked.insert(key);
    }
}

/// Thread-safe counter answering "top N by descending count"
///
/// Ties are broken by canonical form, ascending. The displayed spelling of
/// an item is whichever case variant was recorded last.
pub struct FrequencyStore<T: Countable> {
    ranking: Mutex<Ranking<T>>,
}

impl<T: Countable> FrequencyStore<T> {
    pub fn new() -> Self {
        Self {
            ranking: Mutex::new(Ranking::new()),
        }
    }

    /// Records one occurrence of `item`
    pub fn add_item(&self, item: T) {
        self.ranking.lock().record(item);
    }

    /// Records one occurrence of each item, in order
    pub fn add_items<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut ranking = self.ranking.lock();
        for item in items {
            ranking.record(item);
        }
    }

    /// Returns up to `n` items with the highest counts
    ///
    /// Fewer than `n` entries are returned when fewer distinct items exist.
    pub fn top_n(&self, n: usize) -> Vec<Frequency<T>> {
        let ranking = self.ranking.lock();
        ranking
            .ranked
            .iter()
            .take(n)
            .map(|(Reverse(count), entry)| Frequency {
                item: entry.original.clone(),
                count: *count,
            })
            .collect()
    }

    /// Returns the current count of `item`, matched case-insensitively
    pub fn count(&self, item: &T) -> usize {
        self.ranking
            .lock()
            .counts
            .get(&item.canonical())
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct canonical items
    pub fn len(&self) -> usize {
        self.ranking.lock().counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.ranking.lock().counts.values().sum()
    }
}

impl<T: Countable> Default for FrequencyStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
