use std::fmt;
use std::hash::Hash;

/// Separator placed between the two words of a pair when displayed
pub const PAIR_SEPARATOR: &str = " ";

/// Capability shared by every item the frequency store can count
///
/// An item has an original (as written) form, which is `self`, a case-folded
/// canonical form used as the counting key, and the surface tokens it is made
/// of, which the stop-word filter tests one by one.
pub trait Countable: Clone + Eq + Ord + Hash + fmt::Display + Send + Sync + 'static {
    /// Returns the lowercased form of this item
    fn canonical(&self) -> Self;

    /// Returns the surface tokens of this item, in order
    fn tokens(&self) -> &[String];
}

/// A single word token
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Countable for Word {
    fn canonical(&self) -> Self {
        Self(self.0.to_lowercase())
    }

    fn tokens(&self) -> &[String] {
        std::slice::from_ref(&self.0)
    }
}

/// Two adjacent words, in the order they appeared
///
/// Equality and ordering compare the two words pairwise; the display
/// separator plays no part in either.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordPair([String; 2]);

impl WordPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self([first.into(), second.into()])
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn second(&self) -> &str {
        &self.0[1]
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], PAIR_SEPARATOR, self.0[1])
    }
}

impl Countable for WordPair {
    fn canonical(&self) -> Self {
        Self([self.0[0].to_lowercase(), self.0[1].to_lowercase()])
    }

    fn tokens(&self) -> &[String] {
        &self.0
    }
}
