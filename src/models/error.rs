use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    FileReadError(PathBuf, std::io::Error),
    FileWriteError(PathBuf, std::io::Error),
    ReportParseError(String),
    EmptyResultError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::FileReadError(path, err) => {
                write!(f, "File Read Error: {}: {}", path.display(), err)
            }
            Error::FileWriteError(path, err) => {
                write!(f, "File Write Error: {}: {}", path.display(), err)
            }
            Error::ReportParseError(msg) => write!(f, "Report Parse Error: {}", msg),
            Error::EmptyResultError(msg) => write!(f, "Empty Result Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) | Error::FileReadError(_, err) | Error::FileWriteError(_, err) => {
                Some(err)
            }
            Error::ReportParseError(_) | Error::EmptyResultError(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
                other => Error::ReportParseError(format!("{:?}", other)),
            }
        } else {
            Error::ReportParseError(err.to_string())
        }
    }
}
