// Colored terminal output for analogy answers and table summaries.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use std::path::Path;

use colored::Colorize;

use crate::analogy::{AnalogyResult, Candidate};
use crate::embeddings::EmbeddingTable;

/// Print the interactive prompt banner.
pub fn display_prompt() {
    println!("{}", "a --> b :: c --> d".bold());
    println!("Enter a, b, c words separated by space");
}

/// Display the answer to an analogy query.
///
/// The best pick comes first; any other candidates are listed as runners-up.
pub fn display_analogy(result: &AnalogyResult) {
    let answer = result.word.green().bold().to_string();
    println!("{}", super::analogy_line(&result.query, &answer));
    println!(
        "Best pick: {} {}",
        result.word.bold(),
        format!("(cosine {:.4})", result.score).dimmed()
    );

    if result.candidates.len() > 1 {
        println!();
        display_candidates(&result.candidates);
    }
}

/// Display a ranked list of candidates with their scores.
pub fn display_candidates(candidates: &[Candidate]) {
    println!("  {:>4}  {:<24} {:>8}", "Rank".dimmed(), "Word".dimmed(), "Cosine".dimmed());
    println!("  {}", "-".repeat(40).dimmed());
    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "  {:>4}. {:<24} {}",
            i + 1,
            candidate.word,
            colorize_score(candidate.score),
        );
    }
}

/// Display the cosine similarity between two words.
pub fn display_similarity(left: &str, right: &str, score: f64) {
    println!(
        "cos({}, {}) = {}",
        left.bold(),
        right.bold(),
        colorize_score(score)
    );
}

/// Display a summary of a loaded table.
pub fn display_table_summary(path: &Path, table: &EmbeddingTable) {
    println!("\n{}", "=== Word Vectors ===".bold());
    println!("  File: {}", path.display());
    println!("  Vocabulary: {} words", table.len());
    match table.dimension() {
        Some(dim) => println!("  Dimension: {dim}"),
        None => println!("  Dimension: {}", "n/a (empty table)".dimmed()),
    }
    let sample: Vec<&str> = table.iter().take(10).map(|(w, _)| w).collect();
    if !sample.is_empty() {
        println!("  First words: {}", sample.join(" ").dimmed());
    }
}

/// Print a per-query error without ending the session.
pub fn display_error(err: &dyn std::fmt::Display) {
    println!("{} {}", "Error:".red().bold(), err);
}

/// Colorize a cosine score: strong matches green, weak ones dimmed.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:>8.4}");
    if score >= 0.7 {
        text.green()
    } else if score >= 0.4 {
        text.yellow()
    } else if score >= 0.0 {
        text.normal()
    } else {
        text.dimmed()
    }
}
