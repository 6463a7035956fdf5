use crate::counting::{Frequency, FrequencyStore};
use crate::text::{StopWords, Word, WordPair};

/// Word and word-pair counts for one crawl run
///
/// Every batch passes through the stop-word filter before it reaches its
/// store. A fresh instance is built per run; nothing is shared across runs.
pub struct WordCounts {
    words: FrequencyStore<Word>,
    word_pairs: FrequencyStore<WordPair>,
    stop_words: StopWords,
}

impl WordCounts {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            words: FrequencyStore::new(),
            word_pairs: FrequencyStore::new(),
            stop_words,
        }
    }

    pub fn add_words(&self, words: &[Word]) {
        self.words.add_items(self.stop_words.filter(words));
    }

    pub fn add_word_pairs(&self, word_pairs: &[WordPair]) {
        self.word_pairs.add_items(self.stop_words.filter(word_pairs));
    }

    pub fn top_words(&self, n: usize) -> Vec<Frequency<Word>> {
        self.words.top_n(n)
    }

    pub fn top_word_pairs(&self, n: usize) -> Vec<Frequency<WordPair>> {
        self.word_pairs.top_n(n)
    }

    pub fn words(&self) -> &FrequencyStore<Word> {
        &self.words
    }

    pub fn word_pairs(&self) -> &FrequencyStore<WordPair> {
        &self.word_pairs
    }
}
