// analogy: word analogy queries over pretrained word embeddings
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: load the vectors, compare them, resolve the analogy, print it.

pub mod analogy;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod output;
pub mod similarity;

pub use error::{AnalogyError, Result};
