/// Character used to split a line into word fragments.
///
/// Only the plain space is used; tabs and runs of spaces produce empty
/// fragments which are dropped after normalization.
pub const TOKEN_DELIMITER: char = ' ';

pub const DEFAULT_SOURCE_PATH: &str = "data/input.txt";

pub const DEFAULT_DESTINATION_PATH: &str = "data/output.txt";

pub const DEFAULT_STOPWORDS_PATH: &str = "data/common_words.txt";

/// File extension which marks a gzip-compressed text source.
pub const GZIP_FILE_EXTENSION: &str = "gz";

pub const CSV_HEADER_WORD: &str = "word";

pub const CSV_HEADER_COUNT: &str = "count";
