use crate::types::{Token, TokenRef, WordFrequency};
use std::collections::HashMap;

/// A mapping of tokens to their occurrence counts.
///
/// Besides the counts, the map remembers the order in which each token was
/// first seen, so that iterating (and therefore ranking) is deterministic for a
/// given input. Every stored count is at least 1; a missing token means zero
/// occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    /// A map of tokens to their position in `entries`.
    token_map: HashMap<Token, usize>,

    /// Tokens and their counts, in first-seen order.
    entries: Vec<(Token, WordFrequency)>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `token`, inserting it with a count of 1 if absent.
    ///
    /// Returns the updated count.
    pub fn increment(&mut self, token: &TokenRef) -> WordFrequency {
        self.add(token, 1)
    }

    /// Adds `amount` occurrences of `token`. Adding zero is a no-op, so the
    /// map never holds a zero count.
    pub fn add(&mut self, token: &TokenRef, amount: WordFrequency) -> WordFrequency {
        if let Some(&index) = self.token_map.get(token) {
            let entry = &mut self.entries[index];
            entry.1 += amount;
            entry.1
        } else if amount == 0 {
            0
        } else {
            let index = self.entries.len();
            self.token_map.insert(token.to_string(), index);
            self.entries.push((token.to_string(), amount));
            amount
        }
    }

    /// Returns the number of occurrences of `token`, or `None` if it was never counted.
    pub fn get(&self, token: &TokenRef) -> Option<WordFrequency> {
        self.token_map
            .get(token)
            .map(|&index| self.entries[index].1)
    }

    pub fn contains(&self, token: &TokenRef) -> bool {
        self.token_map.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total_occurrences(&self) -> WordFrequency {
        self.entries.iter().map(|(_, frequency)| frequency).sum()
    }

    /// Iterates over `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenRef, WordFrequency)> {
        self.entries
            .iter()
            .map(|(token, frequency)| (token.as_str(), *frequency))
    }
}

impl FromIterator<(Token, WordFrequency)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (Token, WordFrequency)>>(iter: I) -> Self {
        let mut frequency_map = FrequencyMap::new();

        for (token, frequency) in iter {
            frequency_map.add(&token, frequency);
        }

        frequency_map
    }
}

impl From<FrequencyMap> for HashMap<Token, WordFrequency> {
    fn from(frequency_map: FrequencyMap) -> Self {
        frequency_map.entries.into_iter().collect()
    }
}
