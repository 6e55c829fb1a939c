//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, or check a list of guesses against a known word.

use anyhow::Result;
use clap::{Parser, Subcommand, builder::TypedValueParser};
use std::io;
use wordle_game::{
    commands::{check_guesses, run_play},
    core::Corpus,
    game::{NUM_GUESSES, RandomPicker, Session},
    output::print_check_result,
    wordlists::loader::{corpus_from_file, embedded_corpus},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal, with correct feedback for repeated letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a whitespace-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses per round
    #[arg(
        short = 'g',
        long,
        global = true,
        default_value_t = NUM_GUESSES,
        value_parser = clap::value_parser!(u8).range(1..=20).map(usize::from)
    )]
    max_guesses: usize,

    /// Seed for secret selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Score a list of guesses against a known secret
    Check {
        /// The secret word
        secret: String,

        /// Guesses to submit, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Load the corpus selected by the -w flag
fn load_corpus(wordlist: &str) -> Result<Corpus> {
    match wordlist {
        "embedded" => Ok(embedded_corpus()?),
        path => corpus_from_file(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = load_corpus(&cli.wordlist)?;
    log::info!(
        "corpus ready: {} words of {} letters",
        corpus.len(),
        corpus.word_length()
    );

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&corpus, cli.max_guesses, cli.seed),
        Commands::Check { secret, guesses } => {
            let result = check_guesses(&corpus, &secret, &guesses, cli.max_guesses)?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(corpus: &Corpus, max_guesses: usize, seed: Option<u64>) -> Result<()> {
    let picker = seed.map_or_else(RandomPicker::from_os_rng, RandomPicker::seeded);
    let mut session = Session::with_max_guesses(corpus, picker, max_guesses)?;
    run_play(&mut session, io::stdin().lock())?;
    Ok(())
}
