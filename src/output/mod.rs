// Output formatting — terminal display and JSON rendering.

pub mod terminal;

use anyhow::Result;
use serde::Serialize;

use crate::analogy::Query;

/// Render any result type as pretty JSON for `--json` output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// The answer line `a -> b :: c -> d`, with the query words as typed.
pub fn analogy_line(query: &Query, answer: &str) -> String {
    let [a, b, c] = query.as_typed();
    format!("{a} -> {b} :: {c} -> {answer}")
}
