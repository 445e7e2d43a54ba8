//! Wordle Duel - CLI
//!
//! Race a search-driven opponent in a TUI or text duel, or inspect how the
//! opponent plays.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_duel::{
    commands::{DuelConfig, SolveConfig, analyze_word, run_benchmarks, run_duel, solve_word},
    interactive::{App, run_tui},
    output::{print_analysis_result, print_benchmark_results, print_solve_result},
    solver::Difficulty,
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Wordle duel against a greedy, minimax or alpha-beta opponent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Opponent difficulty
    #[arg(short, long, global = true, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Wordlist: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible targets and opponent choices
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Skip the opponent's thinking pause
    #[arg(long, global = true)]
    no_delay: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI duel (default)
    Play,

    /// Text duel without TUI
    Duel,

    /// Watch the opponent solve a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how the opponent rates a guess against the whole vocabulary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Let every difficulty solve the vocabulary
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Benchmark only the selected difficulty
        #[arg(long)]
        only: bool,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vocabulary> {
    let vocabulary = match wordlist {
        "embedded" => Vocabulary::embedded(),
        path => Vocabulary::from_file(path)
            .with_context(|| format!("failed to load word list from '{path}'"))?,
    };

    if vocabulary.len() < 2 {
        bail!(
            "word list '{wordlist}' has {} usable words, at least 2 are needed",
            vocabulary.len()
        );
    }
    info!(
        "loaded {} words from {wordlist}, {} entries dropped",
        vocabulary.len(),
        vocabulary.dropped()
    );
    Ok(vocabulary)
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would tear the TUI, so only log there when asked to
    if !matches!(command, Commands::Play) || std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let vocabulary = load_vocabulary(&cli.wordlist)?;

    match command {
        Commands::Play => {
            let app = App::new(vocabulary.words(), cli.difficulty, cli.no_delay)?;
            run_tui(app)
        }
        Commands::Duel => run_duel(
            vocabulary.words(),
            &DuelConfig {
                difficulty: cli.difficulty,
                no_delay: cli.no_delay,
                seed: cli.seed,
            },
        ),
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word, cli.difficulty);
            let result = solve_word(&config, vocabulary.words(), &mut rng_from(cli.seed))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, vocabulary.words(), &mut rng_from(cli.seed))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, only } => {
            let difficulties = if only {
                vec![cli.difficulty]
            } else {
                Difficulty::ALL.to_vec()
            };
            let seed = cli.seed.unwrap_or(0);
            let results = run_benchmarks(&difficulties, vocabulary.words(), count, seed)?;
            print_benchmark_results(&results);
            Ok(())
        }
    }
}
