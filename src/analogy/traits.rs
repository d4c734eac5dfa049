// Analogy solver trait — swap-ready abstraction.
//
// The default implementation is an exhaustive linear scan. An approximate
// nearest-neighbour index could implement this trait without changing the
// CLI or the output code.

use super::query::Query;
use super::resolver::Candidate;
use crate::error::Result;

/// Trait for answering an analogy query against some embedding store.
pub trait AnalogySolver {
    /// Return up to `top_n` candidates for `query`, best first.
    fn solve(&self, query: &Query, top_n: usize) -> Result<Vec<Candidate>>;
}
