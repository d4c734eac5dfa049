use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use analogy::analogy::{most_similar, AnalogyResult, AnalogySolver, LinearScan, Query};
use analogy::config::Config;
use analogy::embeddings::{load_vectors_with_progress, EmbeddingTable};
use analogy::output::{terminal, to_json};
use analogy::similarity::cosine_similarity;

/// analogy: word analogies over pretrained word embeddings.
///
/// Answers "a is to b as c is to ?" by finding the word whose offset from c
/// best matches the offset from a to b.
#[derive(Parser)]
#[command(name = "analogy", version, about)]
struct Cli {
    /// Plain-text embeddings file (overrides ANALOGY_VECTORS)
    #[arg(long, global = true)]
    vectors: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for "a b c" lines on stdin and answer each one (default)
    Interactive {
        /// Number of candidates to show per query
        #[arg(long)]
        top: Option<usize>,
    },

    /// Answer a single analogy: A is to B as C is to ?
    Solve {
        a: String,
        b: String,
        c: String,

        /// Number of candidates to show
        #[arg(long)]
        top: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cosine similarity between two words
    Similarity { left: String, right: String },

    /// Words closest to WORD by cosine similarity
    Neighbors {
        word: String,

        /// Number of neighbours to show (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Show vocabulary size and vector dimension
    Info,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("analogy=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(path) = cli.vectors {
        config.vectors_path = path;
    }
    config.require_vectors()?;

    let table = load_table(&config.vectors_path)?;

    match cli.command.unwrap_or(Commands::Interactive { top: None }) {
        Commands::Interactive { top } => {
            let top_n = top.unwrap_or(config.top_n);
            run_interactive(&table, top_n)?;
        }

        Commands::Solve { a, b, c, top, json } => {
            let top_n = top.unwrap_or(config.top_n);
            let query = Query::new(&a, &b, &c);
            let result = LinearScan::new(&table)
                .solve(&query, top_n)
                .and_then(|candidates| AnalogyResult::from_candidates(query.clone(), candidates))
                .with_context(|| format!("Failed to resolve {query}"))?;

            if json {
                println!("{}", to_json(&result)?);
            } else {
                terminal::display_analogy(&result);
            }
        }

        Commands::Similarity { left, right } => {
            let (left, right) = (left.to_lowercase(), right.to_lowercase());
            let score = cosine_similarity(table.lookup(&left)?, table.lookup(&right)?)
                .with_context(|| format!("Failed to compare '{left}' and '{right}'"))?;
            terminal::display_similarity(&left, &right, score);
        }

        Commands::Neighbors { word, top } => {
            let neighbours = most_similar(&word, &table, top)
                .with_context(|| format!("Failed to rank neighbours of '{word}'"))?;
            println!(
                "\n{}",
                format!("=== Nearest words to '{}' ===", word.to_lowercase()).bold()
            );
            terminal::display_candidates(&neighbours);
        }

        Commands::Info => {
            terminal::display_table_summary(&config.vectors_path, &table);
        }
    }

    Ok(())
}

/// Load the vectors file once, with a byte progress bar on stderr.
fn load_table(path: &Path) -> Result<EmbeddingTable> {
    info!("Loading word vectors from {}", path.display());

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Loading [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .expect("valid template")
            .progress_chars("=> "),
    );

    let table = load_vectors_with_progress(path, &pb)
        .with_context(|| format!("Failed to load word vectors from {}", path.display()));
    pb.finish_and_clear();
    let table = table?;

    if table.is_empty() {
        warn!("Vectors file is empty; every query will fail");
    }
    Ok(table)
}

/// Read "a b c" lines from stdin until EOF or a blank line.
///
/// A bad line prints its error and the session carries on.
fn run_interactive(table: &EmbeddingTable, top_n: usize) -> Result<()> {
    let solver = LinearScan::new(table);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    terminal::display_prompt();

    loop {
        print!("> ");
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 || line.trim().is_empty() {
            break;
        }

        let answer = Query::parse(&line).and_then(|query| {
            let candidates = solver.solve(&query, top_n)?;
            AnalogyResult::from_candidates(query, candidates)
        });
        match answer {
            Ok(result) => terminal::display_analogy(&result),
            Err(e) => terminal::display_error(&e),
        }
        println!();
    }

    Ok(())
}
