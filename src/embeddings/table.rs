// EmbeddingTable — the immutable word → vector mapping built once at startup.
//
// Words keep their first-insertion order so that every scan over the table
// visits candidates in the order they appear in the source file. A word that
// repeats takes the later vector but keeps its original position.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{AnalogyError, Result};

/// A frozen vocabulary of words and their fixed-dimension embeddings.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    words: Vec<String>,
    vectors: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    dimension: Option<usize>,
}

impl EmbeddingTable {
    /// Build a table from in-memory `(word, vector)` pairs.
    ///
    /// Runs the same validation as the file loader: every vector must be
    /// non-empty and share the dimension of the first one. Errors report
    /// the 1-based position of the offending entry as its line.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut builder = TableBuilder::default();
        for (i, (word, vector)) in entries.into_iter().enumerate() {
            builder.insert(word.into(), vector, i + 1)?;
        }
        Ok(builder.finish())
    }

    /// Embedding for `word`, if present. Matching is exact (no case-folding).
    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.index.get(word).map(|&i| self.vectors[i].as_slice())
    }

    /// Embedding for `word`, or `UnknownWord` naming it.
    pub fn lookup(&self, word: &str) -> Result<&[f64]> {
        self.get(word)
            .ok_or_else(|| AnalogyError::UnknownWord(word.to_string()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shared vector dimension, or None for an empty table.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// The set of distinct words in the table.
    pub fn vocabulary(&self) -> HashSet<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    /// Words and vectors in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.words
            .iter()
            .zip(self.vectors.iter())
            .map(|(w, v)| (w.as_str(), v.as_slice()))
    }
}

/// Mutable staging area for a table under construction.
#[derive(Debug, Default)]
pub(crate) struct TableBuilder {
    words: Vec<String>,
    vectors: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    dimension: Option<usize>,
}

impl TableBuilder {
    /// Add or replace one entry. `line` is only used for error reporting.
    pub(crate) fn insert(&mut self, word: String, vector: Vec<f64>, line: usize) -> Result<()> {
        if vector.is_empty() {
            return Err(AnalogyError::parse(
                line,
                format!("'{word}' has no vector components"),
            ));
        }

        match self.dimension {
            Some(expected) if expected != vector.len() => {
                return Err(AnalogyError::DimensionMismatch {
                    line,
                    word,
                    expected,
                    actual: vector.len(),
                });
            }
            Some(_) => {}
            None => self.dimension = Some(vector.len()),
        }

        if let Some(&slot) = self.index.get(&word) {
            debug!(word = %word, line, "Duplicate word, replacing earlier vector");
            self.vectors[slot] = vector;
        } else {
            self.index.insert(word.clone(), self.words.len());
            self.words.push(word);
            self.vectors.push(vector);
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> EmbeddingTable {
        EmbeddingTable {
            words: self.words,
            vectors: self.vectors,
            index: self.index,
            dimension: self.dimension,
        }
    }
}
