use crate::text::Countable;
use std::collections::HashSet;

/// Built-in English stop words, used when the configuration names none
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Case-insensitive stop-word set
///
/// A token is removable when its lowercase form is a stop word, unless the
/// token is written entirely in uppercase (acronyms such as "IT" survive).
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates a stop-word set; entries are trimmed and lowercased
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { words }
    }

    /// Creates the built-in English stop-word set
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if this token should be dropped before counting
    pub fn is_removable(&self, token: &str) -> bool {
        !is_all_uppercase(token) && self.words.contains(&token.to_lowercase())
    }

    /// Returns a copy of `items` without the removable ones
    ///
    /// An item is removed only when every one of its tokens is removable, so
    /// a word pair survives as long as one side does.
    pub fn filter<T: Countable>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| !item.tokens().iter().all(|t| self.is_removable(t)))
            .cloned()
            .collect()
    }
}

fn is_all_uppercase(token: &str) -> bool {
    token.to_uppercase() == token
}
