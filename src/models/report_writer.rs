use crate::constants::{CSV_HEADER_COUNT, CSV_HEADER_WORD};
use crate::models::Error;
use crate::types::{RankedList, WordFrequency};
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Output format of a saved ranked list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One `<word>: <count>` line per entry.
    #[default]
    #[value(alias = "txt")]
    Plain,
    /// A `word,count` header followed by one record per entry.
    Csv,
}

/// Writes the ranked list to `writer`, one entry per line, in rank order.
pub fn write_ranked_list<W: Write>(
    ranked_list: &RankedList,
    mut writer: W,
    report_format: ReportFormat,
) -> Result<(), Error> {
    match report_format {
        ReportFormat::Plain => {
            for (word, frequency) in ranked_list {
                writeln!(writer, "{}: {}", word, frequency)?;
            }
            writer.flush()?;
        }
        ReportFormat::Csv => {
            let mut csv_writer = WriterBuilder::new().from_writer(writer);
            csv_writer.write_record([CSV_HEADER_WORD, CSV_HEADER_COUNT])?;
            for (word, frequency) in ranked_list {
                csv_writer.write_record([word.as_str(), frequency.to_string().as_str()])?;
            }
            csv_writer.flush()?;
        }
    }

    Ok(())
}

/// Saves the ranked list to the file at `path`, replacing any previous content.
///
/// The list is written to a temporary file next to `path` which is renamed
/// over `path` once complete, so a failed write never leaves a partial report.
///
/// # Errors
/// Returns `Error::FileWriteError` if the file cannot be created or written.
pub fn save_ranked_list<P: AsRef<Path>>(
    ranked_list: &RankedList,
    path: P,
    report_format: ReportFormat,
) -> Result<(), Error> {
    let path = path.as_ref();
    let to_write_error = |err: std::io::Error| Error::FileWriteError(path.to_path_buf(), err);

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(directory).map_err(to_write_error)?;

    write_ranked_list(
        ranked_list,
        BufWriter::new(temp_file.as_file_mut()),
        report_format,
    )
    .map_err(|err| match err {
        Error::IoError(io_err) => to_write_error(io_err),
        other => other,
    })?;

    temp_file.persist(path).map_err(|err| to_write_error(err.error))?;

    debug!("Wrote {} entries to {}", ranked_list.len(), path.display());

    Ok(())
}

/// Parses a ranked list previously written by `write_ranked_list`.
pub fn read_ranked_list<R: BufRead>(
    reader: R,
    report_format: ReportFormat,
) -> Result<RankedList, Error> {
    let mut ranked_list = RankedList::new();

    match report_format {
        ReportFormat::Plain => {
            for (index, line) in reader.lines().enumerate() {
                let line = line?;
                if line.is_empty() {
                    continue;
                }

                let (word, frequency) = line.rsplit_once(": ").ok_or_else(|| {
                    Error::ReportParseError(format!(
                        "Line {}: expected `<word>: <count>`, got {:?}",
                        index + 1,
                        line
                    ))
                })?;

                ranked_list.push((word.to_string(), parse_frequency(frequency, index + 1)?));
            }
        }
        ReportFormat::Csv => {
            let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

            for (index, record) in csv_reader.records().enumerate() {
                let record = record?;

                let word = record.get(0).ok_or_else(|| {
                    Error::ReportParseError(format!("Record {}: missing word", index + 1))
                })?;
                let frequency = record.get(1).ok_or_else(|| {
                    Error::ReportParseError(format!("Record {}: missing count", index + 1))
                })?;

                ranked_list.push((word.to_string(), parse_frequency(frequency, index + 1)?));
            }
        }
    }

    Ok(ranked_list)
}

/// Loads a ranked list from the report file at `path`.
pub fn load_ranked_list<P: AsRef<Path>>(
    path: P,
    report_format: ReportFormat,
) -> Result<RankedList, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| Error::FileReadError(path.to_path_buf(), err))?;

    read_ranked_list(BufReader::new(file), report_format).map_err(|err| match err {
        Error::IoError(io_err) => Error::FileReadError(path.to_path_buf(), io_err),
        other => other,
    })
}

fn parse_frequency(text: &str, line_number: usize) -> Result<WordFrequency, Error> {
    text.trim().parse::<WordFrequency>().map_err(|err| {
        Error::ReportParseError(format!(
            "Line {}: invalid count {:?}: {}",
            line_number, text, err
        ))
    })
}
