// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens only ever contain lowercase
/// alphanumeric characters once they have been normalized.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text document.
pub type WordFrequency = usize;

/// A single `(Token, WordFrequency)` pair of a ranked list.
pub type RankedEntry = (Token, WordFrequency);

/// Tokens paired with their frequencies, ordered by decreasing frequency.
pub type RankedList = Vec<RankedEntry>;
