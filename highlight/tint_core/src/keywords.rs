//! Word lists and ordered keyword classification.
//!
//! A language configures an ordered list of `(WordList, Style)` rules.
//! Classification walks the rules in order and the first list containing
//! the word decides its style, so a word present in two lists always gets
//! the style of the earlier one.

use rustc_hash::FxHashSet;

use crate::Style;

/// Set of exact words, built from whitespace-separated text.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<Box<str>>,
}

impl WordList {
    /// Parse a whitespace-separated list. Duplicates collapse.
    pub fn new(text: &str) -> Self {
        WordList {
            words: text.split_whitespace().map(Box::from).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        WordList {
            words: iter.into_iter().map(Box::from).collect(),
        }
    }
}

/// Ordered keyword rules; order and table identity are fixed at
/// construction.
#[derive(Clone, Debug, Default)]
pub struct KeywordRules {
    rules: Vec<(WordList, Style)>,
}

impl KeywordRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule with lower precedence than every existing one.
    #[must_use]
    pub fn rule(mut self, words: WordList, style: Style) -> Self {
        self.rules.push((words, style));
        self
    }

    /// Style of the first rule whose list contains `word`.
    pub fn classify(&self, word: &str) -> Option<Style> {
        self.rules
            .iter()
            .find(|(words, _)| words.contains(word))
            .map(|&(_, style)| style)
    }
}
