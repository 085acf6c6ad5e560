use crate::models::Error;
use crate::types::{Token, TokenRef};
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A set of common words which are excluded from counting.
///
/// The set is built once before a run and never changes afterwards. An empty
/// filter lets every token through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    stopwords: HashSet<Token>,
}

impl StopwordFilter {
    /// A filter which excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a filter from already clean words. Each word is lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { stopwords }
    }

    /// Reads one word per line. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut words = Vec::new();

        for line in reader.lines() {
            words.push(line?);
        }

        Ok(Self::from_words(words))
    }

    /// Loads the stopword list stored at `path`.
    ///
    /// # Errors
    /// Returns `Error::FileReadError` if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| Error::FileReadError(path.to_path_buf(), err))?;

        let filter = Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            Error::IoError(io_err) => Error::FileReadError(path.to_path_buf(), io_err),
            other => other,
        })?;

        debug!("Loaded {} stopwords from {}", filter.len(), path.display());

        Ok(filter)
    }

    pub fn contains(&self, token: &TokenRef) -> bool {
        self.stopwords.contains(token)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
