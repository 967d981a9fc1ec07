use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why the count field could not be turned into a count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("Invalid N. Enter a whole number (e.g. 50).")]
    NotAnInteger,
    #[error("Please enter a positive whole number for N.")]
    NotPositive,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Generate numbers first.")]
    Empty,
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
