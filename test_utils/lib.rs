use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use word_analyser::{RankedList, Token, WordFrequency};

#[path = "src/constants.rs"]
pub mod constants;

/// A scratch directory which is removed when dropped.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Writes `contents` to `file_name` inside the workspace and returns its path.
    pub fn write_file(&self, file_name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(file_name);
        let mut file = fs::File::create(&path).expect("Failed to create test file");
        file.write_all(contents).expect("Failed to write test file");
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to build an owned ranked list from string slices.
pub fn ranked(entries: &[(&str, WordFrequency)]) -> RankedList {
    entries
        .iter()
        .map(|(word, frequency)| (word.to_string(), *frequency))
        .collect()
}

// Helper function to get the expected word counts from a fixture file
//
// Lines of the form `EXPECTED: <word> <count>` are collected; everything else is ignored.
pub fn get_expected_counts(file_path: &Path) -> Vec<(Token, WordFrequency)> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim().strip_prefix("EXPECTED:")?;
            let (word, count) = line.trim().split_once(' ')?;
            Some((word.to_string(), count.trim().parse().ok()?))
        })
        .collect()
}
