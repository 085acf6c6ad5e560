#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod config;
pub use config::AnalyserConfig;
pub mod constants;
pub mod models;
pub use models::{
    add_word, generate_word_map, generate_word_map_from_file, load_ranked_list, process_line,
    read_ranked_list, save_ranked_list, write_ranked_list, AnalysisReport, Error, FrequencyMap,
    ReportFormat, StopwordFilter,
};
pub mod types;
pub use types::{RankedEntry, RankedList, Token, TokenRef, WordFrequency};
mod utils;
pub use utils::{normalize, rank_words, split_line, summarize, top_words};

use log::info;

/// Counts the words of `config.source_path`, ranks them and writes the ranked
/// list to `config.destination_path`.
///
/// The destination is only written once the ranked list and its summary have
/// been built, so a failed run never leaves a partial report behind.
///
/// # Errors
/// - `Error::FileReadError` if the source or stopword file cannot be read.
/// - `Error::EmptyResultError` if no (non-common) word was found; the
///   destination is not touched in that case.
/// - `Error::FileWriteError` if the destination cannot be written.
pub fn analyse_file(config: &AnalyserConfig) -> Result<AnalysisReport, Error> {
    let stopwords = match &config.stopwords_path {
        Some(stopwords_path) => StopwordFilter::load(stopwords_path)?,
        None => StopwordFilter::empty(),
    };

    let ranked_list = analyse_file_with_stopwords(&config.source_path, &stopwords)?;

    let summary = summarize(
        &ranked_list,
        &config.source_path.display().to_string(),
        &config.destination_path.display().to_string(),
        config.is_filtered(),
    )?;

    save_ranked_list(&ranked_list, &config.destination_path, config.report_format)?;

    info!(
        "Analysed {}: {} distinct words written to {}",
        config.source_path.display(),
        ranked_list.len(),
        config.destination_path.display()
    );

    Ok(AnalysisReport {
        ranked_list,
        summary,
    })
}

/// Counts and ranks the words of the file at `source_path` without writing anything.
pub fn analyse_file_with_stopwords<P: AsRef<std::path::Path>>(
    source_path: P,
    stopwords: &StopwordFilter,
) -> Result<RankedList, Error> {
    let frequency_map = generate_word_map_from_file(source_path, stopwords)?;

    Ok(rank_words(&frequency_map))
}
