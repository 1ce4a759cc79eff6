use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied argument was empty or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("header in CSV was empty")]
    EmptyHeader,

    #[error("row content doesn't match header: expected {expected} fields, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// A row error annotated with its 1-based line in the source.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("index {index} out of bounds for row of {len} fields")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl Error {
    pub(crate) fn at_line(self, line: usize) -> Self {
        Error::Line {
            line,
            source: Box::new(self),
        }
    }

    /// True for failures caused by the shape of the input data rather than
    /// by the caller or the underlying reader.
    pub fn is_data_format(&self) -> bool {
        match self {
            Error::EmptyHeader | Error::ColumnCount { .. } => true,
            Error::Line { source, .. } => source.is_data_format(),
            _ => false,
        }
    }

    /// Source line of the failure, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Line { line, .. } => Some(*line),
            Error::EmptyHeader => Some(1),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
