use std::fmt;

use serde::Serialize;

use crate::error::{AnalogyError, Result};

/// Number of words in an analogy query.
pub const QUERY_WORDS: usize = 3;

/// An analogy query "a is to b as c is to ?".
///
/// `a`, `b` and `c` are case-folded to lowercase for lookup; `input` keeps
/// the words as they were typed so answers can echo them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub a: String,
    pub b: String,
    pub c: String,
    pub input: [String; QUERY_WORDS],
}

impl Query {
    pub fn new(a: &str, b: &str, c: &str) -> Self {
        Self {
            a: a.to_lowercase(),
            b: b.to_lowercase(),
            c: c.to_lowercase(),
            input: [a.to_string(), b.to_string(), c.to_string()],
        }
    }

    /// The three words as originally typed.
    pub fn as_typed(&self) -> [&str; QUERY_WORDS] {
        [
            self.input[0].as_str(),
            self.input[1].as_str(),
            self.input[2].as_str(),
        ]
    }

    /// Parse a line of exactly three whitespace-separated words.
    pub fn parse(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [a, b, c] => Ok(Self::new(a, b, c)),
            _ => Err(AnalogyError::InvalidInput {
                expected: QUERY_WORDS,
                actual: words.len(),
            }),
        }
    }

    /// True if `word` is one of the three query words.
    pub fn mentions(&self, word: &str) -> bool {
        word == self.a || word == self.b || word == self.c
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} :: {} -> ?", self.a, self.b, self.c)
    }
}
