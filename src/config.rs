use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Vectors file used when ANALOGY_VECTORS is unset.
pub const DEFAULT_VECTORS_PATH: &str = "data/glove.6B.50d.txt";

/// Configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// Command-line flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Plain-text embeddings file (ANALOGY_VECTORS)
    pub vectors_path: PathBuf,
    /// How many candidates to print per query (ANALOGY_TOP_N, default 1)
    pub top_n: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Used by `load` and tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vectors_path = lookup("ANALOGY_VECTORS")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VECTORS_PATH));

        let top_n = match lookup("ANALOGY_TOP_N") {
            Some(raw) => {
                let n: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("ANALOGY_TOP_N must be a positive integer, got '{raw}'"))?;
                if n == 0 {
                    anyhow::bail!("ANALOGY_TOP_N must be at least 1");
                }
                n
            }
            None => 1,
        };

        Ok(Self {
            vectors_path,
            top_n,
        })
    }

    /// Check that the vectors file exists before starting a long load.
    pub fn require_vectors(&self) -> Result<()> {
        if !self.vectors_path.exists() {
            anyhow::bail!(
                "Vectors file not found: {}\n\
                 Pass --vectors <PATH> or set ANALOGY_VECTORS in your .env file.\n\
                 GloVe vectors are available from https://nlp.stanford.edu/projects/glove/",
                self.vectors_path.display()
            );
        }
        Ok(())
    }
}
