use crate::text::{Word, WordPair};

/// Breaks text into words
///
/// Splits on whitespace, strips leading and trailing non-alphanumeric
/// characters from each piece, then drops pieces that are empty or start
/// with a digit.
///
/// # Examples
///
/// ```
/// use wordcrawl::text::segment;
///
/// let words = segment("'It can't be true,' said the good-hearted? 22 :");
/// let words: Vec<_> = words.iter().map(|w| w.as_str()).collect();
/// assert_eq!(words, ["It", "can't", "be", "true", "said", "the", "good-hearted"]);
/// ```
pub fn segment(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .map(|piece| piece.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty() && !token.starts_with(|c: char| c.is_ascii_digit()))
        .map(Word::from)
        .collect()
}

/// Builds the adjacent pairs of a word sequence, in order
pub fn pair_up(words: &[Word]) -> Vec<WordPair> {
    words
        .windows(2)
        .map(|window| WordPair::new(window[0].as_str(), window[1].as_str()))
        .collect()
}
