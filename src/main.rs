use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use word_analyser::constants::{
    DEFAULT_DESTINATION_PATH, DEFAULT_SOURCE_PATH, DEFAULT_STOPWORDS_PATH,
};
use word_analyser::{analyse_file, top_words, AnalyserConfig, ReportFormat};

/// Counts how many times each word appears in a text document, ranks the
/// words by decreasing frequency and saves the ranked list to a file.
#[derive(Parser, Debug)]
#[command(name = "word-analyser", version)]
struct Args {
    /// Text file to analyse (`.gz` files are decompressed)
    #[arg(default_value = DEFAULT_SOURCE_PATH)]
    source: PathBuf,

    /// File the ranked list is written to
    #[arg(default_value = DEFAULT_DESTINATION_PATH)]
    destination: PathBuf,

    /// Common words to exclude, one per line [default: data/common_words.txt if present]
    #[arg(long, conflicts_with = "no_stopwords")]
    stopwords: Option<PathBuf>,

    /// Count every word, including common ones
    #[arg(long)]
    no_stopwords: bool,

    /// Format of the written list (plain or csv)
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    format: ReportFormat,

    /// Also print the N most frequent words
    #[arg(long)]
    top: Option<usize>,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    let stopwords_path = if args.no_stopwords {
        None
    } else {
        args.stopwords.or_else(|| {
            let default_path = Path::new(DEFAULT_STOPWORDS_PATH);
            default_path.is_file().then(|| default_path.to_path_buf())
        })
    };

    let mut config =
        AnalyserConfig::new(&args.source, &args.destination).with_report_format(args.format);
    if let Some(stopwords_path) = stopwords_path {
        info!("Filtering common words from {}", stopwords_path.display());
        config = config.with_stopwords(stopwords_path);
    }

    match analyse_file(&config) {
        Ok(report) => {
            println!("{}", report.summary);

            if let Some(n) = args.top {
                println!();
                for (word, frequency) in top_words(&report.ranked_list, n) {
                    println!("{}: {}", word, frequency);
                }
            }
        }
        Err(e) => {
            error!("Error analysing {}: {}", config.source_path.display(), e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
