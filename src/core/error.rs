//! Error kinds for loading and tallying a posts CSV

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a CSV file into a ranking.
///
/// Every variant is fatal for a run: the CLI prints the message and exits
/// with status 1.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("cannot open file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("list empty: {} has no data rows after the header", path.display())]
    EmptyFile { path: PathBuf },

    #[error("column \"{column}\" not found in header [{}]", header.join(", "))]
    ColumnNotFound { column: String, header: Vec<String> },

    #[error("line {line} has {fields} field(s), cannot read column at offset {offset}")]
    IndexOutOfRange {
        line: usize,
        fields: usize,
        offset: usize,
    },

    #[error("top count must be at least 1")]
    InvalidTop,
}

pub type TallyResult<T> = Result<T, TallyError>;
