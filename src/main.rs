use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordsearch::alphabet::Alphabet;
use wordsearch::direction::DirectionSet;
use wordsearch::generator::{self, GenerateError, GeneratorConfig, Reveal, DEFAULT_MAX_STEPS};
use wordsearch::word_list::WordList;

/// Word-search puzzle generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Words to hide in the grid (e.g., "cat dog emu")
    words: Vec<String>,

    /// Path to a word list file (one word per line, '#' starts a comment)
    #[arg(short = 'f', long)]
    words_file: Option<String>,

    /// Grid side length (defaults to the recommended size for the words)
    #[arg(short, long)]
    size: Option<usize>,

    /// Fill alphabet: english, french, or custom:<letters>
    #[arg(short, long, default_value = "english")]
    alphabet: Alphabet,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the grid with only the hidden words showing
    #[arg(short, long)]
    reveal: bool,

    /// Allow words to run left and up as well
    #[arg(long)]
    all_directions: bool,

    /// Maximum number of tentative placements before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u64,
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a GenerateError
        if let Some(generate_err) = e.downcast_ref::<GenerateError>() {
            eprintln!("Error: {}", generate_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Collect words from the arguments and the optional word list file.
/// 3. Generate the puzzle.
/// 4. Print the grid (and optionally the revealed grid) and the word list on stdout.
/// 5. Print diagnostics (size, seed, steps, timing) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Gather the words, file first so its order wins
    let mut word_list = match &cli.words_file {
        Some(path) => WordList::load_from_path(path)?,
        None => WordList::default(),
    };
    word_list.extend(cli.words.iter().cloned());

    // 2. Build the config; an explicit seed keeps the run reproducible, and we
    //    pick one ourselves otherwise so it can be reported
    let size = cli.size.unwrap_or_else(|| generator::recommended_size(&word_list.words));
    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = GeneratorConfig::new(size)
        .with_alphabet(cli.alphabet.clone())
        .with_directions(if cli.all_directions { DirectionSet::All } else { DirectionSet::Classic })
        .with_max_steps(Some(cli.max_steps))
        .with_seed(seed);

    // 3. Generate
    let t_generate = Instant::now();
    let puzzle = generator::generate(&word_list.words, &config)?;
    let generate_secs = t_generate.elapsed().as_secs_f64();

    // 4. Print the puzzle
    println!("{}", puzzle.render(Reveal::Hidden));
    println!();
    for word in puzzle.words() {
        println!("{word}");
    }
    if cli.reveal {
        println!();
        println!("{}", puzzle.render(Reveal::Revealed));
        println!();
        print!("{}", puzzle.answer_key());
    }

    // 5. Diagnostics
    let stats = puzzle.stats();
    eprintln!(
        "Placed {} words in a {size} × {size} grid in {:.3}s ({} steps, {} backtracks; seed {seed}).",
        puzzle.words().len(),
        generate_secs,
        stats.steps,
        stats.backtracks,
    );

    Ok(())
}
