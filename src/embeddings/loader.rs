// Plain-text vectors loader (GloVe / word2vec text format without a header).
//
// One entry per line: `<word> <d1> <d2> ... <dD>`, whitespace separated,
// UTF-8. The whole file is parsed into memory before any query runs.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

use indicatif::ProgressBar;
use tracing::info;

use super::table::{EmbeddingTable, TableBuilder};
use crate::error::{AnalogyError, Result};

/// Load an embeddings file from disk.
pub fn load_vectors(path: &Path) -> Result<EmbeddingTable> {
    let file = File::open(path).map_err(|e| AnalogyError::from_io(path, e))?;
    load_from(path, BufReader::new(file))
}

/// Load an embeddings file, advancing `pb` by the number of bytes read.
///
/// The bar's length is set to the file size; the caller owns its style
/// and decides when to clear it.
pub fn load_vectors_with_progress(path: &Path, pb: &ProgressBar) -> Result<EmbeddingTable> {
    let file = File::open(path).map_err(|e| AnalogyError::from_io(path, e))?;
    if let Ok(meta) = file.metadata() {
        pb.set_length(meta.len());
    }
    load_from(path, BufReader::new(pb.wrap_read(file)))
}

fn load_from<R: BufRead>(path: &Path, reader: R) -> Result<EmbeddingTable> {
    let start = Instant::now();
    let table = read_vectors(reader).map_err(|e| match e {
        // Mid-file read failures carry no path from read_vectors
        AnalogyError::Io { source, .. } => AnalogyError::from_io(path, source),
        other => other,
    })?;

    info!(
        path = %path.display(),
        words = table.len(),
        dim = table.dimension().unwrap_or(0),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Loaded word vectors"
    );
    Ok(table)
}

/// Parse embeddings from any buffered reader.
///
/// Fails on the first malformed line; there are no partial results.
pub fn read_vectors<R: BufRead>(reader: R) -> Result<EmbeddingTable> {
    let mut builder = TableBuilder::default();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| {
            if source.kind() == ErrorKind::InvalidData {
                AnalogyError::parse(line_no, "line is not valid UTF-8")
            } else {
                AnalogyError::Io {
                    path: "<reader>".into(),
                    source,
                }
            }
        })?;
        let (word, vector) = parse_line(&line, line_no)?;
        builder.insert(word.to_string(), vector, line_no)?;
    }

    Ok(builder.finish())
}

/// Split one line into its word and vector components.
pub(crate) fn parse_line(line: &str, line_no: usize) -> Result<(&str, Vec<f64>)> {
    let mut tokens = line.split_whitespace();

    let word = tokens
        .next()
        .ok_or_else(|| AnalogyError::parse(line_no, "empty line"))?;

    let vector = tokens
        .map(|t| {
            t.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    AnalogyError::parse(line_no, format!("'{t}' is not a number (word '{word}')"))
                })
        })
        .collect::<Result<Vec<f64>>>()?;

    if vector.is_empty() {
        return Err(AnalogyError::parse(
            line_no,
            format!("'{word}' has no vector components"),
        ));
    }

    Ok((word, vector))
}
