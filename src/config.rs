use crate::constants::{DEFAULT_DESTINATION_PATH, DEFAULT_SOURCE_PATH};
use crate::models::ReportFormat;
use std::path::{Path, PathBuf};

/// Describes a single analysis run: where the text comes from, where the
/// ranked list goes and which stopwords (if any) are filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyserConfig {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    /// `None` disables stopword filtering entirely.
    pub stopwords_path: Option<PathBuf>,
    pub report_format: ReportFormat,
}

impl AnalyserConfig {
    pub fn new<S: AsRef<Path>, D: AsRef<Path>>(source_path: S, destination_path: D) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            destination_path: destination_path.as_ref().to_path_buf(),
            stopwords_path: None,
            report_format: ReportFormat::Plain,
        }
    }

    pub fn with_stopwords<P: AsRef<Path>>(mut self, stopwords_path: P) -> Self {
        self.stopwords_path = Some(stopwords_path.as_ref().to_path_buf());
        self
    }

    pub fn with_report_format(mut self, report_format: ReportFormat) -> Self {
        self.report_format = report_format;
        self
    }

    /// Whether stopword filtering is active for this run.
    pub fn is_filtered(&self) -> bool {
        self.stopwords_path.is_some()
    }
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH, DEFAULT_DESTINATION_PATH)
    }
}
