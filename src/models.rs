pub mod analysis_report;
pub use analysis_report::AnalysisReport;

pub mod error;
pub use error::Error;

pub mod frequency_map;
pub use frequency_map::FrequencyMap;

pub mod report_writer;
pub use report_writer::{
    load_ranked_list, read_ranked_list, save_ranked_list, write_ranked_list, ReportFormat,
};

pub mod stopword_filter;
pub use stopword_filter::StopwordFilter;

pub mod word_aggregator;
pub use word_aggregator::{add_word, generate_word_map, generate_word_map_from_file, process_line};
