//! Stylo - n-gram authorship comparison CLI
//!
//! Loads a directory of `.txt` files (author = first character of the file
//! name) and sweeps n-gram configurations to see which of two candidate
//! authors writes more like a target author.

mod loader;
mod sweep;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use stylo_core::Corpus;
use stylo_types::{NgramConfig, DEFAULT_TOP_N};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::sweep::{run_sweep, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "stylo", version, about = "Compare authors by n-gram frequencies")]
struct Args {
    /// Directory holding the `.txt` documents
    dir: PathBuf,

    /// File names to leave out (repeatable)
    #[arg(long, short = 'x')]
    exclude: Vec<String>,

    /// Author whose documents are being attributed
    #[arg(long, default_value = "C")]
    target: String,

    /// The two candidate authors
    #[arg(long, num_args = 2, default_values = ["A", "B"])]
    candidates: Vec<String>,

    /// Longest n-gram length to try for each granularity
    #[arg(long, default_value_t = 20)]
    max_len: usize,

    /// Number of most frequent n-grams kept per author
    #[arg(long, short = 'n', default_value_t = DEFAULT_TOP_N)]
    num: usize,

    /// Print corpus statistics and per-author summaries instead of sweeping
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let texts = loader::load_dir(&args.dir, &args.exclude)?;
    if texts.is_empty() {
        bail!("no .txt documents found in {}", args.dir.display());
    }
    let mut corpus = loader::into_corpus(texts)?;
    info!(documents = corpus.len(), "corpus loaded");

    if args.summary {
        print_summaries(&mut corpus, args.num)?;
        return Ok(());
    }

    let [first, second]: [String; 2] = match args.candidates.try_into() {
        Ok(pair) => pair,
        Err(_) => bail!("exactly two candidates are required"),
    };
    let config = SweepConfig {
        target: args.target,
        candidates: [first, second],
        max_len: args.max_len,
        num: args.num,
    };

    let report = run_sweep(&mut corpus, &config)?;
    println!("{report}");

    let metrics = corpus.metrics();
    info!(
        models_built = metrics.models_built,
        summaries_computed = metrics.summaries_computed,
        "sweep finished"
    );
    Ok(())
}

fn print_summaries(corpus: &mut Corpus, num: usize) -> Result<()> {
    corpus.set_model(NgramConfig::default());
    println!("{}", corpus.stats());

    let authors: Vec<String> = corpus.authors().map(str::to_owned).collect();
    for author in &authors {
        let summary = corpus.summarise(author, num)?;
        println!("{summary}");
    }
    Ok(())
}
