use std::{io, path::PathBuf};

use crate::mesh::Section;

/// Errors produced while reading a dump.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    /// The [FormatError], if this is one.
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(e) => Some(e),
            Self::Io(_) => None,
        }
    }
}

/// A malformed dump, located by file and 1-based line number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}:{line}: {kind}", .path.display())]
pub struct FormatError {
    pub path: PathBuf,
    pub line: usize,
    pub kind: FormatErrorKind,
}

/// What exactly was wrong with a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    #[error("expected `{expected} <count>` header, found {found:?}")]
    MissingHeader {
        expected: Section,
        found: String,
    },
    #[error("unexpected section {found:?}; expected {expected}")]
    UnexpectedSection {
        expected: String,
        found: String,
    },
    #[error("{section} declared {declared} entries, but only {found} precede this line")]
    CountMismatch {
        section: Section,
        declared: usize,
        found: usize,
    },
    #[error("{section} declared {declared} entries, but more data follows")]
    TrailingData {
        section: Section,
        declared: usize,
    },
    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        expected: usize,
        found: usize,
    },
    #[error("could not parse number from {0:?}")]
    InvalidNumber(String),
    #[error("index {index} out of range: 1..={max}")]
    IndexOutOfRange {
        index: i64,
        max: usize,
    },
    #[error("index {0} does not fit the index type")]
    IndexOverflow(usize),
    #[error("entry index {found} out of sequence; expected {expected}")]
    NonSequentialIndex {
        expected: usize,
        found: String,
    },
    #[error("boundary {0} declared more than once")]
    DuplicateBoundary(i64),
    #[error("boundary edges must either all carry a marker or none may")]
    InconsistentMarkers,
    #[error("NEIGHBORS declared {declared} entries for {triangles} triangles")]
    NeighborCount {
        declared: usize,
        triangles: usize,
    },
    #[error("file ended; expected {0}")]
    UnexpectedEof(String),
}

impl FormatErrorKind {
    /// Attach a location to this error.
    pub fn at(self, path: impl Into<PathBuf>, line: usize) -> FormatError {
        FormatError {
            path: path.into(),
            line,
            kind: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let e = FormatErrorKind::FieldCount {
            expected: 5,
            found: 4,
        }
        .at("dumps/qtree.dat", 7);
        assert_eq!(
            e.to_string(),
            "dumps/qtree.dat:7: expected 5 tab-separated fields, found 4"
        );
    }
}
