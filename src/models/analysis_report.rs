use crate::types::{RankedList, WordFrequency};

/// The outcome of a completed analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Every counted word, ranked by decreasing frequency.
    pub ranked_list: RankedList,

    /// Human-readable summary of the run, as printed by the CLI.
    pub summary: String,
}

impl AnalysisReport {
    /// Number of distinct words which were counted.
    pub fn distinct_words(&self) -> usize {
        self.ranked_list.len()
    }

    /// Total number of counted occurrences.
    pub fn total_occurrences(&self) -> WordFrequency {
        self.ranked_list.iter().map(|(_, frequency)| frequency).sum()
    }
}
