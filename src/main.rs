//! Wordle Game - CLI
//!
//! Word guessing game with TUI and line modes, a daily word, random words and
//! shareable custom words.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use wordle_game::{
    commands::{SimpleOptions, check_guess, request_from_flags, run_simple, word_for_date},
    config::Config,
    game::{Session, WordSelector},
    logging::init_tracing,
    output::{formatters::colored_guess, print_statistics, print_word_of_day},
    share::{custom_link, parse_statistics_link, statistics_link},
    stats::{JsonFileStore, STATISTICS_FILE, Statistics, Store},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in six tries: daily, random or custom words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Override the number of guesses per game
    #[arg(long, global = true)]
    rows: Option<usize>,
}

/// Which target the first game uses
#[derive(Args, Debug, Default)]
struct ModeArgs {
    /// Play a random word instead of the word of the day
    #[arg(short, long)]
    random: bool,

    /// Play a custom word
    #[arg(long, conflicts_with_all = ["random", "link"])]
    word: Option<String>,

    /// Play the custom word encoded in a share link
    #[arg(long, conflicts_with = "random")]
    link: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(ModeArgs),

    /// Simple CLI mode (line-based game without TUI)
    Simple(ModeArgs),

    /// Score one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Show the word of the day
    Today {
        /// Date to look up (YYYY-MM-DD), defaults to today (UTC)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Print a share link for a custom word
    Share {
        /// Word to share
        word: String,
    },

    /// Show saved statistics
    Stats {
        /// Print a link that carries the statistics
        #[arg(short, long, conflicts_with = "import")]
        export: bool,

        /// Replace saved statistics with the ones carried by a link
        #[arg(short, long)]
        import: Option<String>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str, letter_limit: usize) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(letter_limit)?,
        path => Dictionary::from_file(path, letter_limit)?,
    };
    info!(words = dictionary.len(), letter_limit, "dictionary loaded");
    Ok(dictionary)
}

fn statistics_store() -> JsonFileStore {
    JsonFileStore::new(JsonFileStore::default_path(STATISTICS_FILE))
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(rows) = cli.rows {
        config.game.rows = rows;
        config.validate()?;
    }

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(ModeArgs::default()));

    match command {
        Commands::Play(mode) => run_play_command(&config, &cli.wordlist, &mode),
        Commands::Simple(mode) => run_simple_command(&config, &cli.wordlist, &mode),
        Commands::Check { guess, target } => run_check_command(&config, &guess, &target),
        Commands::Today { date } => run_today_command(&config, &cli.wordlist, date),
        Commands::Share { word } => run_share_command(&config, &word),
        Commands::Stats { export, import } => {
            run_stats_command(&config, export, import.as_deref())
        }
    }
}

fn start_session<'d>(
    config: &Config,
    dictionary: &'d Dictionary,
    mode: &ModeArgs,
) -> Result<(Session<'d>, WordSelector)> {
    let selector = WordSelector::new(config.game.epoch);
    let request = request_from_flags(mode.random, mode.word.as_deref(), mode.link.as_deref())?;
    let session = Session::start(
        dictionary,
        &selector,
        &request,
        config.game.rows,
        &mut rand::rng(),
    )?;
    Ok((session, selector))
}

fn run_play_command(config: &Config, wordlist: &str, mode: &ModeArgs) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let dictionary = load_dictionary(wordlist, config.game.letter_limit)?;
    let (session, selector) = start_session(config, &dictionary, mode)?;
    let store = statistics_store();

    let app = App::new(
        session,
        selector,
        &store,
        config.display.show_debug_info,
        config.share.origin.clone(),
    )?;
    run_tui(app)
}

fn run_simple_command(config: &Config, wordlist: &str, mode: &ModeArgs) -> Result<()> {
    let dictionary = load_dictionary(wordlist, config.game.letter_limit)?;
    let (session, selector) = start_session(config, &dictionary, mode)?;
    let store = statistics_store();

    let options = SimpleOptions {
        selector,
        store: &store,
        share_origin: config.share.origin.clone(),
        show_debug_info: config.display.show_debug_info,
    };
    run_simple(session, &options)
}

fn run_check_command(config: &Config, guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target, config.game.letter_limit)?;

    println!("\n  {}", colored_guess(&result.guess, &result.feedback));
    println!("  {}  ({})\n", result.feedback.to_emoji(), result.feedback);
    if result.feedback.is_perfect() {
        println!("  🎯 {} is the target\n", result.target.text().to_uppercase());
    }
    Ok(())
}

fn run_today_command(config: &Config, wordlist: &str, date: Option<NaiveDate>) -> Result<()> {
    let dictionary = load_dictionary(wordlist, config.game.letter_limit)?;
    let selector = WordSelector::new(config.game.epoch);
    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    let daily = word_for_date(&selector, &dictionary, date);
    print_word_of_day(daily.date, daily.day_index, &daily.word);
    Ok(())
}

fn run_share_command(config: &Config, word: &str) -> Result<()> {
    let word = WordSelector::custom_word(word, config.game.letter_limit)?;
    println!("{}", custom_link(&config.share.origin, word.text()));
    Ok(())
}

fn run_stats_command(config: &Config, export: bool, import: Option<&str>) -> Result<()> {
    let store = statistics_store();

    if let Some(link) = import {
        let statistics = parse_statistics_link(link)?;
        store.save(&statistics)?;
        println!("Imported statistics into {}", store.path().display());
        print_statistics(&statistics);
        return Ok(());
    }

    let statistics = Store::<Statistics>::load(&store)
        .with_context(|| format!("Failed to load statistics from {}", store.path().display()))?;

    if export {
        println!("{}", statistics_link(&config.share.origin, &statistics)?);
    } else {
        print_statistics(&statistics);
    }
    Ok(())
}
