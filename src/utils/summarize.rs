use crate::models::Error;
use crate::types::RankedList;

/// Builds the three line, human-readable summary of a ranked list.
///
/// `filtered_mode` tells whether common words were excluded while counting,
/// which changes the wording of the first line. There is no trailing newline.
///
/// # Errors
/// Returns `Error::EmptyResultError` when `ranked_list` has no entries, since
/// there is no most popular word to report.
///
/// # Example
/// ```
/// use word_analyser::summarize;
///
/// let ranked = vec![("hello".to_string(), 400), ("there".to_string(), 100)];
/// let summary = summarize(&ranked, "input.txt", "output.txt", false).unwrap();
/// assert!(summary.starts_with("2 words have been found in input.txt."));
/// ```
pub fn summarize(
    ranked_list: &RankedList,
    source_name: &str,
    destination_name: &str,
    filtered_mode: bool,
) -> Result<String, Error> {
    let (top_word, top_frequency) = ranked_list.first().ok_or_else(|| {
        Error::EmptyResultError(format!("No words have been found in {}", source_name))
    })?;

    let qualifier = if filtered_mode { "non-common " } else { "" };

    Ok(format!(
        "{} {}words have been found in {}.\n\
         The most popular word is \"{}\" with {} occurrences.\n\
         The whole list has been written to the file {}.",
        ranked_list.len(),
        qualifier,
        source_name,
        top_word,
        top_frequency,
        destination_name
    ))
}
