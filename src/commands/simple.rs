//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameError, Session, TargetRequest, WordSelector};
use crate::output::{print_board, print_keyboard, print_outcome, print_statistics};
use crate::share::{custom_link, decode_custom_link};
use crate::stats::{Statistics, Store};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Stats,
    /// Start a new game
    New(TargetRequest),
    /// Print a share link for a custom word
    Share(String),
    /// A recognised command whose argument could not be used
    Invalid(String),
    Guess(String),
}

/// Parse one line of input
///
/// Anything that is not a known command is treated as a guess.
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let (head, rest) = input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(head, rest)| (head, rest.trim()));

    match (head.to_lowercase().as_str(), rest) {
        ("quit" | "q" | "exit", "") => Command::Quit,
        ("help" | "?", "") => Command::Help,
        ("stats", "") => Command::Stats,
        ("today" | "new", "") => Command::New(TargetRequest::today()),
        ("random", "") => Command::New(TargetRequest::Random),
        ("custom", word) if !word.is_empty() => {
            Command::New(TargetRequest::Custom(word.to_string()))
        }
        ("link", link) if !link.is_empty() => match decode_custom_link(link) {
            Ok(word) => Command::New(TargetRequest::Custom(word)),
            Err(e) => Command::Invalid(format!("Could not open link: {e}")),
        },
        ("share", word) if !word.is_empty() => Command::Share(word.to_string()),
        _ => Command::Guess(input.to_string()),
    }
}

/// Everything the line-mode game needs besides the session itself
pub struct SimpleOptions<'a, S: Store<Statistics>> {
    pub selector: WordSelector,
    pub store: &'a S,
    pub share_origin: String,
    pub show_debug_info: bool,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// statistics store cannot be loaded.
pub fn run_simple<S: Store<Statistics>>(
    mut session: Session<'_>,
    options: &SimpleOptions<'_, S>,
) -> Result<()> {
    let mut statistics = options.store.load()?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help(session.letter_limit(), session.rows());

    let mut rng = rand::rng();

    loop {
        let snapshot = session.snapshot();
        print_board(&snapshot);
        print_keyboard(&snapshot.keyboard);

        if options.show_debug_info {
            println!("  {} {}\n", "debug: target is".bright_black(), session.target());
        }

        let prompt = if snapshot.outcome.is_over() {
            "Play again? (today/random/custom <word>/quit)"
        } else {
            "Guess"
        };

        match parse_command(&get_user_input(prompt)?) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(session.letter_limit(), session.rows()),
            Command::Stats => print_statistics(&statistics),
            Command::Invalid(message) => println!("❌ {message}\n"),
            Command::Share(word) => {
                match WordSelector::custom_word(&word, session.letter_limit()) {
                    Ok(word) => {
                        println!("\n🔗 {}\n", custom_link(&options.share_origin, word.text()));
                    }
                    Err(e) => println!("❌ {e}\n"),
                }
            }
            Command::New(request) => {
                match session.reset(&options.selector, &request, &mut rng) {
                    Ok(()) => println!("\n🔄 New game: {}\n", session.mode()),
                    Err(e) => println!("❌ {e}\n"),
                }
            }
            Command::Guess(text) => match session.submit_guess(&text, &mut statistics) {
                Ok(snapshot) if snapshot.outcome.is_over() => {
                    print_board(&snapshot);
                    print_outcome(&snapshot);
                    if let Err(e) = options.store.save(&statistics) {
                        warn!(error = %e, "failed to save statistics");
                        println!("⚠️  Could not save statistics: {e}");
                    }
                }
                Ok(_) => {}
                Err(GameError::GameAlreadyOver) => {
                    println!(
                        "Game over. Type 'today', 'random' or 'custom <word>' to play again.\n"
                    );
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

fn print_help(letter_limit: usize, rows: usize) {
    println!("Guess the hidden {letter_limit}-letter word in {rows} tries.");
    println!("After each guess the letters are colored:\n");
    println!("  - {} letter in the right spot", " G ".black().on_green());
    println!("  - {} letter in the word, wrong spot", " Y ".black().on_yellow());
    println!("  - {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'today', 'random', 'custom <word>', 'link <url>', 'share <word>',");
    println!("          'stats', 'help', 'quit'\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
