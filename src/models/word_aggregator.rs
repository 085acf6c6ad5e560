use crate::constants::GZIP_FILE_EXTENSION;
use crate::models::{Error, FrequencyMap, StopwordFilter};
use crate::types::TokenRef;
use crate::utils::{normalize, split_line};
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Counts one occurrence of `word` unless it is empty or a stopword.
///
/// `word` is expected to be normalized already.
pub fn add_word(word: &TokenRef, frequency_map: &mut FrequencyMap, stopwords: &StopwordFilter) {
    if word.is_empty() || stopwords.contains(word) {
        return;
    }

    frequency_map.increment(word);
}

/// Splits `line` on single spaces, normalizes each fragment and counts it.
pub fn process_line(line: &str, frequency_map: &mut FrequencyMap, stopwords: &StopwordFilter) {
    for fragment in split_line(line) {
        add_word(&normalize(fragment), frequency_map, stopwords);
    }
}

/// Reads `reader` line by line and accumulates every line into one frequency map.
///
/// Both `\n` and `\r\n` line endings are accepted.
pub fn generate_word_map<R: BufRead>(
    reader: R,
    stopwords: &StopwordFilter,
) -> Result<FrequencyMap, Error> {
    let mut frequency_map = FrequencyMap::new();

    for line in reader.lines() {
        process_line(&line?, &mut frequency_map, stopwords);
    }

    Ok(frequency_map)
}

/// Generates the frequency map of the text file at `path`.
///
/// Files with a `.gz` extension are decompressed while they are read.
///
/// # Errors
/// Returns `Error::FileReadError` if the file cannot be opened, read, or is
/// not valid UTF-8.
pub fn generate_word_map_from_file<P: AsRef<Path>>(
    path: P,
    stopwords: &StopwordFilter,
) -> Result<FrequencyMap, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| Error::FileReadError(path.to_path_buf(), err))?;

    let is_gzip = path
        .extension()
        .map_or(false, |extension| extension == GZIP_FILE_EXTENSION);

    let reader: Box<dyn Read> = if is_gzip {
        debug!("Decompressing gzip source {}", path.display());
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let frequency_map =
        generate_word_map(BufReader::new(reader), stopwords).map_err(|err| match err {
            Error::IoError(io_err) => Error::FileReadError(path.to_path_buf(), io_err),
            other => other,
        })?;

    debug!(
        "Counted {} distinct words ({} occurrences) in {}",
        frequency_map.len(),
        frequency_map.total_occurrences(),
        path.display()
    );

    Ok(frequency_map)
}
