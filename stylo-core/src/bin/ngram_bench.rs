//! N-gram Pipeline Benchmarking Tool
//!
//! Measures throughput of the per-document stages on one large text file,
//! such as a Project Gutenberg book.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: granularity-aware cleanup of the raw text
//! 2. **Extract**: sliding-window n-gram extraction over normalized text
//! 3. **Count**: extraction plus frequency counting (the full document model)
//!
//! ## Usage
//!
//! ```bash
//! # 4-character n-grams (default)
//! ./target/release/ngram_bench /path/to/book.txt
//!
//! # 2-word n-grams
//! ./target/release/ngram_bench /path/to/book.txt word 2
//! ```
//!
//! Run with `--release`; debug builds are dominated by assertions.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use stylo_core::analyzer::ngram::extract_ngrams;
use stylo_core::analyzer::{NgramFrequencies, TextNormalizer};
use stylo_types::{Granularity, NgramConfig};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 4 {
        usage();
    }

    let path = &args[1];

    let granularity = match args.get(2).map(String::as_str) {
        None => Granularity::Char,
        Some(arg) => parse_granularity(arg).unwrap_or_else(|| usage()),
    };
    let length = match args.get(3) {
        None => default_length(granularity),
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => usage(),
        },
    };
    let config = NgramConfig {
        length,
        granularity,
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = String::from_utf8_lossy(&bytes);

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Config:    {}\n", config);

    let normalized = bench_normalize(&input, granularity);
    bench_extract(&normalized, config);
    bench_count(&normalized, config);

    Ok(())
}

fn usage() -> ! {
    eprintln!("Usage: ngram_bench <path> [word|char] [length]");
    std::process::exit(1);
}

fn parse_granularity(arg: &str) -> Option<Granularity> {
    Granularity::ALL.into_iter().find(|g| g.to_string() == arg)
}

fn default_length(granularity: Granularity) -> usize {
    if granularity.is_word() {
        2
    } else {
        4
    }
}

fn bench_normalize(input: &str, granularity: Granularity) -> String {
    let normalizer = TextNormalizer::new(granularity);
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0);
    out
}

fn bench_extract(normalized: &str, config: NgramConfig) {
    println!("=== Extract ===");

    warmup(|| {
        let mut sink = 0u64;
        extract_ngrams(normalized, config.length, config.granularity, |_| sink += 1);
        std::hint::black_box(sink);
    });

    let mut ngrams = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        extract_ngrams(normalized, config.length, config.granularity, |_| local += 1);
        ngrams = local;
        std::hint::black_box(ngrams);
    });

    print_perf("Extract", normalized.len(), elapsed, ngrams);
}

fn bench_count(normalized: &str, config: NgramConfig) {
    println!("=== Count ===");

    let run = || {
        let mut freq = NgramFrequencies::new();
        extract_ngrams(normalized, config.length, config.granularity, |g| freq.add(g));
        freq
    };

    warmup(|| {
        std::hint::black_box(run());
    });

    let mut distinct = 0usize;
    let mut total = 0u64;
    let elapsed = measure(|| {
        let freq = run();
        distinct = freq.len();
        total = freq.total();
        std::hint::black_box(&freq);
    });

    print_perf("Count", normalized.len(), elapsed, total);
    println!("Distinct    : {}\n", fmt_count(distinct as u64));
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, ngrams: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.1} MiB/s", mib / secs);

    if ngrams > 0 {
        println!("N-grams     : {}", fmt_count(ngrams));
        println!("N-grams/sec : {}", fmt_count((ngrams as f64 / secs) as u64));
    }

    println!("--------------------------------");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
