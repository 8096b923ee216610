//! Display functions for the line-mode game and commands

use super::formatters::{colored_guess, colorize_letter, create_progress_bar};
use crate::core::{KeyboardState, Word};
use crate::game::{Outcome, SessionSnapshot};
use crate::stats::Statistics;
use colored::Colorize;

/// Keyboard rows as printed under the board
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Print the board: guessed rows colored, remaining rows as blanks
pub fn print_board(snapshot: &SessionSnapshot) {
    println!();
    for record in &snapshot.guesses {
        println!("  {}", colored_guess(&record.word, &record.feedback));
    }
    let blank = " _ ".repeat(snapshot.letter_limit);
    for _ in snapshot.guesses.len()..snapshot.rows {
        println!("  {}", blank.bright_black());
    }
    println!();
}

/// Print the keyboard with hint colors
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .bytes()
            .map(|letter| colorize_letter(char::from(letter), keyboard.get(letter)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(snapshot: &SessionSnapshot) {
    let answer = snapshot
        .answer
        .as_ref()
        .map_or_else(String::new, |w| w.text().to_uppercase());

    match snapshot.outcome {
        Outcome::Won => {
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "  {} Solved {} in {} {}",
                "🎉".bold(),
                answer.bright_yellow().bold(),
                snapshot.current_guess.to_string().bright_cyan().bold(),
                if snapshot.current_guess == 1 { "guess" } else { "guesses" }
            );
            print_share_grid(snapshot);
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Outcome::Lost => {
            println!("{}", "═".repeat(60).red());
            println!("  {} The word was {}", "❌".bold(), answer.bright_yellow().bold());
            print_share_grid(snapshot);
            println!("{}", "═".repeat(60).red());
        }
        Outcome::InProgress => {}
    }
}

fn print_share_grid(snapshot: &SessionSnapshot) {
    println!();
    println!(
        "  {} {}/{}",
        snapshot.mode,
        if snapshot.outcome == Outcome::Won {
            snapshot.current_guess.to_string()
        } else {
            "X".to_string()
        },
        snapshot.rows
    );
    for record in &snapshot.guesses {
        println!("  {}", record.feedback.to_emoji());
    }
    println!();
}

/// Print accumulated statistics
pub fn print_statistics(statistics: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (mode, tally) in statistics.iter() {
        let rate = tally.win_rate() * 100.0;
        println!(
            "\n  {}\n    Played: {:4}  Won: {:4}  Lost: {:4}",
            mode.title().bright_white().bold(),
            tally.total(),
            tally.win.to_string().green(),
            tally.lose.to_string().red()
        );
        println!(
            "    Win rate: {} {rate:5.1}%",
            create_progress_bar(rate, 100.0, 30).green()
        );
    }

    let overall = statistics.overall();
    println!(
        "\n  Total: {} games, {:.0}% won\n",
        overall.total(),
        overall.win_rate() * 100.0
    );
}

/// Print the word-of-the-day lookup
pub fn print_word_of_day(date: chrono::NaiveDate, day_index: i64, word: &Word) {
    println!(
        "{} (day {}): {}",
        date.format("%Y-%m-%d"),
        day_index,
        word.text().to_uppercase().bright_yellow().bold()
    );
}
