// Analogy resolution: "a is to b as c is to ?".

pub mod query;
pub mod resolver;
pub mod traits;

pub use query::Query;
pub use resolver::{most_similar, resolve_analogy, AnalogyResult, Candidate, LinearScan};
pub use traits::AnalogySolver;
