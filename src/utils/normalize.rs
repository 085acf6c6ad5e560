use crate::constants::TOKEN_DELIMITER;
use crate::types::Token;

/// Strips every non-alphanumeric character from `text` and lowercases what is left.
///
/// Letters and digits are recognized with Unicode rules (`char::is_alphanumeric`),
/// their relative order is preserved. The result may be empty.
///
/// Lowercasing can expand a letter into several chars (`'İ'` becomes `i` plus a
/// combining dot), so the lowercased text is filtered once more.
///
/// # Example
/// ```
/// use word_analyser::normalize;
///
/// assert_eq!(normalize(" U V W  "), "uvw");
/// assert_eq!(normalize("Don't!"), "dont");
/// assert_eq!(normalize("--"), "");
/// assert_eq!(normalize("İstanbul"), "istanbul");
/// ```
pub fn normalize(text: &str) -> Token {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Splits a line into raw word fragments on the single space character.
///
/// Consecutive spaces (and fragments made only of tabs or punctuation) yield
/// fragments which normalize to an empty token.
pub fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(TOKEN_DELIMITER)
}
