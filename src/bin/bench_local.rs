//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of word lists and grid sizes on *your* machine.
//! - Runs each case several times with consecutive seeds and reports the median.
//! - Failures (exhausted search or budget) are counted, not fatal.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 20`
//! - Print the last grid per case:   `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Cases live in `get_cases()` below.
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordsearch::generator::{self, GeneratorConfig, Reveal};

/// Simple local benchmark runner: time puzzle generation for several cases.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per case (each uses the next seed; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 5)]
    num_repeats: u64,

    /// First seed to use
    #[arg(short = 's', long, default_value_t = 0)]
    seed: u64,

    /// Print the grid from the last successful run of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

/// A benchmark case: a name, the words, and the grid size.
#[derive(Clone)]
struct Case {
    name: &'static str,
    words: &'static [&'static str],
    size: usize,
}

/// Edit/add new cases here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "three short words, roomy", words: &["cat", "dog", "emu"], size: 10 },
        Case { name: "three short words, tight", words: &["cat", "dog", "emu"], size: 3 },
        Case {
            name: "animals, recommended size",
            words: &["lion", "tiger", "giraffe", "elephant", "zebra", "monkey", "hippo", "rhino", "cheetah", "gazelle"],
            size: 11,
        },
        Case {
            name: "animals, tight",
            words: &["lion", "tiger", "giraffe", "elephant", "zebra", "monkey", "hippo", "rhino", "cheetah", "gazelle"],
            size: 8,
        },
        Case {
            name: "french, accents",
            words: &["éléphant", "girafe", "hérisson", "écureuil", "château", "forêt"],
            size: 9,
        },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b).expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 32;

fn main() {
    /// One row in the benchmark summary: (name, median seconds, successes, runs, median steps).
    type SummaryRow = (String, f64, u64, u64, u64);

    let cli = Cli::parse();
    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {} ({} words, {}×{})", idx + 1, case.name, case.words.len(), case.size, case.size);

        let mut times = Vec::new();
        let mut steps = Vec::new();
        let mut successes = 0;
        let mut last_grid = None;

        for rep in 0..cli.num_repeats {
            let config = GeneratorConfig::new(case.size).with_seed(cli.seed + rep);
            let t_generate = Instant::now();
            let result = generator::generate(black_box(case.words), &config);
            let secs = t_generate.elapsed().as_secs_f64();
            times.push(secs);

            match result {
                Ok(puzzle) => {
                    successes += 1;
                    steps.push(puzzle.stats().steps as f64);
                    eprintln!("  run {:>2}/{:>2}: {:.4}s ({} steps)", rep + 1, cli.num_repeats, secs, puzzle.stats().steps);
                    last_grid = Some(puzzle.render(Reveal::Hidden));
                }
                Err(e) => {
                    eprintln!("  run {:>2}/{:>2}: {:.4}s ✗ {}", rep + 1, cli.num_repeats, secs, e);
                }
            }
        }

        let med = median(times);
        let med_steps = median(steps) as u64;
        eprintln!("  → median {med:.4}s; {successes}/{} {}", cli.num_repeats, pluralizer(cli.num_repeats, "success", Some("successes")));

        if cli.print_grid {
            if let Some(grid) = last_grid {
                println!("{grid}\n");
            }
        }

        summary.push((case.name.to_string(), med, successes, cli.num_repeats, med_steps));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_NAME_LEN$} | {:>10} | {:>9} | {:>12}", "case", "median (s)", "successes", "median steps");
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<9}-+-{:-<12}", "", "", "", "");
    for (name, med, successes, runs, med_steps) in &summary {
        let ratio = format!("{successes}/{runs}");
        eprintln!("{name:<MAX_NAME_LEN$} | {med:>10.4} | {ratio:>9} | {med_steps:>12}");
    }
}

fn pluralizer(count: u64, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        plural.map_or_else(|| format!("{singular}s"), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "run", None), "runs");
        assert_eq!(pluralizer(1, "run", None), "run");
        assert_eq!(pluralizer(2, "success", Some("successes")), "successes");
        assert_eq!(pluralizer(1, "success", Some("successes")), "success");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_case_names_fit_summary() {
        assert!(get_cases().iter().all(|c| c.name.len() <= MAX_NAME_LEN));
    }
}
