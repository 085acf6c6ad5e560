use crate::models::FrequencyMap;
use crate::types::{RankedEntry, RankedList};

/// Converts a frequency map into a list ranked by decreasing frequency.
///
/// ### Sorting Order:
/// - **Primary:** frequency in descending order.
/// - **Secondary:** tokens with equal frequency keep the order in which they
///   were first seen by the map (the sort is stable over first-seen order).
///
/// ### Example:
/// ```rust
/// use word_analyser::{rank_words, FrequencyMap};
///
/// let map: FrequencyMap = vec![
///     ("word1".to_string(), 60),
///     ("word2".to_string(), 10),
///     ("word3".to_string(), 30),
///     ("word4".to_string(), 50),
/// ]
/// .into_iter()
/// .collect();
///
/// let ranked = rank_words(&map);
/// assert_eq!(ranked[0], ("word1".to_string(), 60));
/// assert_eq!(ranked[3], ("word2".to_string(), 10));
/// ```
pub fn rank_words(frequency_map: &FrequencyMap) -> RankedList {
    let mut ranked_list: RankedList = frequency_map
        .iter()
        .map(|(token, frequency)| (token.to_owned(), frequency))
        .collect();

    // `sort_by` is stable, so ties stay in first-seen order
    ranked_list.sort_by(|a, b| b.1.cmp(&a.1));

    ranked_list
}

/// Returns at most the first `n` entries of a ranked list.
pub fn top_words(ranked_list: &RankedList, n: usize) -> &[RankedEntry] {
    &ranked_list[..n.min(ranked_list.len())]
}
