//! TUI rendering with ratatui
//!
//! Board, keyboard hints, messages and statistics for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterMatch;
use crate::game::{Outcome, SessionSnapshot};
use crate::stats::{Statistics, Store};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: Store<Statistics>>(f: &mut Frame, app: &App<'_, S>) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, &snapshot, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, &snapshot, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, &snapshot, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, &snapshot, chunks[4]);
}

fn match_style(state: Option<LetterMatch>) -> Style {
    match state {
        Some(LetterMatch::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterMatch::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterMatch::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn cell(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_header<S: Store<Statistics>>(
    f: &mut Frame,
    app: &App<'_, S>,
    snapshot: &SessionSnapshot,
    area: Rect,
) {
    let mut title = format!("🟩 WORDLE - {}", snapshot.mode);
    if app.show_debug_info {
        title.push_str(&format!("  [debug: {}]", app.session.target()));
    }

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: Store<Statistics>>(
    f: &mut Frame,
    app: &App<'_, S>,
    snapshot: &SessionSnapshot,
    area: Rect,
) {
    let mut lines = Vec::with_capacity(snapshot.rows * 2);

    for row in 0..snapshot.rows {
        let spans: Vec<Span> = if let Some(record) = snapshot.guesses.get(row) {
            record
                .word
                .chars()
                .iter()
                .zip(record.feedback.matches())
                .flat_map(|(&letter, &state)| {
                    [cell(char::from(letter), match_style(Some(state))), Span::raw(" ")]
                })
                .collect()
        } else if row == snapshot.guesses.len() && snapshot.outcome == Outcome::InProgress {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            let typing = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            (0..snapshot.letter_limit)
                .flat_map(|i| {
                    let letter = typed.get(i).copied().unwrap_or('_');
                    [cell(letter, typing), Span::raw(" ")]
                })
                .collect()
        } else {
            (0..snapshot.letter_limit)
                .flat_map(|_| [cell('·', Style::default().fg(Color::DarkGray)), Span::raw(" ")])
                .collect()
        };

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Guess {}/{} ", snapshot.current_guess, snapshot.rows))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| cell(char::from(letter), match_style(snapshot.keyboard.get(letter))))
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel<S: Store<Statistics>>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_win_rate<S: Store<Statistics>>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let tally = app.stats.tally(app.session.mode());
    let percent = (tally.win_rate() * 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", app.session.mode()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent.min(100))
        .label(format!("{} won / {} lost", tally.win, tally.lose));

    f.render_widget(gauge, area);
}

fn render_messages<S: Store<Statistics>>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: Store<Statistics>>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | t: today  r: random  c: custom word  q: quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a guess, Enter to submit | TAB for custom word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::CustomWord => (
            " Enter custom word | ESC to cancel ",
            app.custom_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: Store<Statistics>>(
    f: &mut Frame,
    app: &App<'_, S>,
    snapshot: &SessionSnapshot,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let overall = app.stats.overall();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        overall.total(),
        overall.win_rate() * 100.0
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[0]);

    let help_text = if snapshot.outcome.is_over() {
        "q: Quit | t: Today | r: Random | c: Custom"
    } else {
        "Esc: Quit | ^T: Today | ^R: Random | TAB: Custom"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{DEFAULT_ROWS, GameMode, Session, WordSelector};
    use crate::stats::MemoryStore;
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_keyboard() {
        let dictionary = Dictionary::from_strs(&["hello", "crane"], 5).unwrap();
        let store = MemoryStore::new();
        let session = Session::with_target(
            &dictionary,
            GameMode::Random,
            Word::new("hello").unwrap(),
            DEFAULT_ROWS,
        )
        .unwrap();
        let mut app = App::new(
            session,
            WordSelector::default(),
            &store,
            true,
            "https://wordle.example".into(),
        )
        .unwrap();
        app.input_buffer = "cran".into();
        app.submit_guess();
        app.input_buffer = "crane".into();
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("WORDLE"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Guess 1/6"));
        assert!(text.contains("debug: hello"));
    }
}
