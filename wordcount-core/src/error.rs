use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of arguments.
    #[error("usage: ./wordcount.py {{--count | --topcount}} file")]
    Usage,

    /// Mode outside `--count` / `--topcount`.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Input file missing, unreadable, or failed mid-read.
    #[error("{}: {}", .path.display(), .source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// True for argument-shape mistakes, which are reported on stdout.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage | Error::UnknownOption(_))
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}
