//! Wordgrid - CLI
//!
//! Word-guessing game with TUI and line modes, random or daily answers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordgrid::{
    answer::{self, Mode},
    commands::run_simple,
    config::{MAX_ROWS, Timing},
    interactive::{App, run_tui},
    settings::Settings,
    session::Session,
    validate::Validator,
    wordlists::{ANSWERS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Word-guessing game with duplicate-aware scoring and daily puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer mode: random (default) or daily
    #[arg(short, long, global = true, default_value = "random")]
    mode: String,

    /// Accept any guess without dictionary validation
    #[arg(long, global = true)]
    no_spellcheck: bool,

    /// Path to a custom answer list (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = Mode::from_name(&cli.mode);
    let settings = Settings::load();
    let use_validation = settings.spellcheck && !cli.no_spellcheck;

    let answers = match &cli.wordlist {
        Some(path) => loader::load_from_file(path)?,
        None => loader::words_from_slice(ANSWERS),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(answers, mode, settings, use_validation)?;
            run_tui(app)
        }
        Commands::Simple => {
            let answer = answer::pick_answer(mode, &answers)
                .ok_or_else(|| anyhow::anyhow!("answer list is empty"))?;
            let validator =
                use_validation.then(|| Validator::from_embedded().with_extra_answers(&answers));
            let session = Session::new(answer, MAX_ROWS, validator, Timing::instant());
            // Revealing the answer in share text would spoil the daily puzzle.
            let show_answer = mode == Mode::Random;
            run_simple(session, show_answer).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
