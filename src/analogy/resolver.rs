// Linear-scan analogy resolver.
//
// For a query (a, b, c) we look for the word d whose offset from c points
// the same way as b's offset from a:
//
//   d = argmax_w cos(e_b - e_a, e_w - e_c),  w ∉ {a, b, c}
//
// Every vocabulary word is scored, so a query costs O(V·D). Candidates are
// visited in table insertion order (file order) and only a strictly better
// score displaces the current best, so ties go to the word seen first.

use serde::Serialize;
use tracing::debug;

use super::query::Query;
use super::traits::AnalogySolver;
use crate::embeddings::EmbeddingTable;
use crate::error::{AnalogyError, Result};
use crate::similarity::{cosine_similarity, difference, l2_norm};

/// A scored candidate word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub score: f64,
}

/// The resolved "d" for a query, with the similarity that selected it.
///
/// `candidates` holds the ranked list the answer was taken from, best first;
/// its first entry is always `word` / `score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalogyResult {
    pub query: Query,
    pub word: String,
    pub score: f64,
    pub candidates: Vec<Candidate>,
}

impl AnalogyResult {
    /// Build a result from a best-first candidate list.
    pub fn from_candidates(query: Query, candidates: Vec<Candidate>) -> Result<Self> {
        let best = candidates.first().ok_or(AnalogyError::NoCandidate)?;
        Ok(Self {
            word: best.word.clone(),
            score: best.score,
            query,
            candidates,
        })
    }
}

/// Most candidates reserved up front, whatever `top_n` asks for.
const PREALLOCATED_CANDIDATES: usize = 64;

/// Exhaustive scan over a borrowed, immutable table.
#[derive(Debug, Clone, Copy)]
pub struct LinearScan<'a> {
    table: &'a EmbeddingTable,
}

impl<'a> LinearScan<'a> {
    pub fn new(table: &'a EmbeddingTable) -> Self {
        Self { table }
    }
}

impl AnalogySolver for LinearScan<'_> {
    fn solve(&self, query: &Query, top_n: usize) -> Result<Vec<Candidate>> {
        let e_a = self.table.lookup(&query.a)?;
        let e_b = self.table.lookup(&query.b)?;
        let e_c = self.table.lookup(&query.c)?;

        let target = difference(e_b, e_a);
        if !has_direction(&target) {
            // a and b share a vector, or their offset overflows
            return Err(AnalogyError::UndefinedSimilarity);
        }

        let mut ranking = Ranking::new(top_n);
        let mut offset = Vec::with_capacity(e_c.len());

        for (word, vector) in self.table.iter() {
            if query.mentions(word) {
                continue;
            }
            offset.clear();
            offset.extend(vector.iter().zip(e_c.iter()).map(|(w, c)| w - c));

            match cosine_similarity(&target, &offset) {
                Ok(score) => ranking.offer(word, score),
                Err(AnalogyError::UndefinedSimilarity) => {
                    debug!(word, "Skipping candidate with the same vector as c");
                }
                Err(e) => return Err(e),
            }
        }

        let candidates = ranking.into_candidates()?;
        debug!(
            query = %query,
            best = candidates[0].word.as_str(),
            score = candidates[0].score,
            scanned = self.table.len(),
            "Resolved analogy"
        );
        Ok(candidates)
    }
}

/// Resolve "a is to b as c is to ?" against `table`.
///
/// Words are case-folded to lowercase before lookup. The three query words
/// are never returned.
pub fn resolve_analogy(a: &str, b: &str, c: &str, table: &EmbeddingTable) -> Result<AnalogyResult> {
    let query = Query::new(a, b, c);
    let candidates = LinearScan::new(table).solve(&query, 1)?;
    AnalogyResult::from_candidates(query, candidates)
}

/// Rank vocabulary words by cosine similarity to `word`, best first.
///
/// `word` is case-folded to lowercase and excluded from the results.
/// Words whose vector has zero norm are skipped.
pub fn most_similar(word: &str, table: &EmbeddingTable, top_n: usize) -> Result<Vec<Candidate>> {
    let word = word.to_lowercase();
    let e = table.lookup(&word)?;
    if !has_direction(e) {
        return Err(AnalogyError::UndefinedSimilarity);
    }

    let mut ranking = Ranking::new(top_n);
    for (w, vector) in table.iter() {
        if w == word {
            continue;
        }
        match cosine_similarity(e, vector) {
            Ok(score) => ranking.offer(w, score),
            Err(AnalogyError::UndefinedSimilarity) => {
                debug!(word = w, "Skipping zero vector");
            }
            Err(err) => return Err(err),
        }
    }
    ranking.into_candidates()
}

/// True if `v` has a non-zero, finite norm.
fn has_direction(v: &[f64]) -> bool {
    let norm = l2_norm(v);
    norm > 0.0 && norm.is_finite()
}

/// Bounded best-first list. Equal scores keep arrival order.
struct Ranking {
    limit: usize,
    best: Vec<Candidate>,
}

impl Ranking {
    fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            best: Vec::with_capacity(limit.min(PREALLOCATED_CANDIDATES) + 1),
        }
    }

    fn offer(&mut self, word: &str, score: f64) {
        if self.best.len() == self.limit {
            match self.best.last() {
                Some(worst) if score > worst.score => {}
                _ => return,
            }
        }
        let pos = self
            .best
            .iter()
            .position(|c| score > c.score)
            .unwrap_or(self.best.len());
        self.best.insert(
            pos,
            Candidate {
                word: word.to_string(),
                score,
            },
        );
        self.best.truncate(self.limit);
    }

    fn into_candidates(self) -> Result<Vec<Candidate>> {
        if self.best.is_empty() {
            Err(AnalogyError::NoCandidate)
        } else {
            Ok(self.best)
        }
    }
}
