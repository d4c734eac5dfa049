// Error taxonomy for loading embeddings and answering analogy queries.
//
// Library functions return `AnalogyError` so callers can tell a bad file
// apart from a bad query. The binary wraps these in anyhow with context.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading a vectors file and
/// printing the answer to a query.
#[derive(Debug, Error)]
pub enum AnalogyError {
    /// The vectors file does not exist.
    #[error("Vectors file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The vectors file exists but could not be read (permissions, a
    /// directory path, a failing device).
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line in the vectors file is malformed or not valid UTF-8.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A vector's length differs from the first vector in the table.
    #[error(
        "Dimension mismatch on line {line}: '{word}' has {actual} components, expected {expected}"
    )]
    DimensionMismatch {
        line: usize,
        word: String,
        expected: usize,
        actual: usize,
    },

    /// A query word has no embedding.
    #[error("Unknown word: '{0}' is not in the vocabulary")]
    UnknownWord(String),

    /// Cosine similarity against a zero-norm vector.
    #[error("Cosine similarity is undefined for a zero-norm vector")]
    UndefinedSimilarity,

    /// Cosine similarity over vectors of different lengths.
    #[error("Cannot compare vectors of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// An input line does not hold the expected number of words.
    #[error("Expected {expected} words separated by spaces, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    /// Nothing left to search once the query words are excluded.
    #[error("No candidate words left to search")]
    NoCandidate,
}

impl AnalogyError {
    /// Create a Parse error for a 1-based line number.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Map an I/O error on `path`, promoting NotFound to its own kind.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, AnalogyError>;
