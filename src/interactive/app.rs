//! TUI application state and logic

use crate::game::{GameError, Outcome, Session, SessionSnapshot, TargetRequest, WordSelector};
use crate::share::custom_link;
use crate::stats::{Statistics, Store, StoreError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App<'a, S: Store<Statistics>> {
    pub session: Session<'a>,
    pub selector: WordSelector,
    pub store: &'a S,
    pub stats: Statistics,
    pub input_buffer: String,
    pub custom_word: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub show_debug_info: bool,
    pub share_origin: String,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    CustomWord,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: Store<Statistics>> App<'a, S> {
    /// Create the app around a started session
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if saved statistics exist but cannot be read.
    pub fn new(
        session: Session<'a>,
        selector: WordSelector,
        store: &'a S,
        show_debug_info: bool,
        share_origin: String,
    ) -> Result<Self, StoreError> {
        let stats = store.load()?;
        let mut app = Self {
            session,
            selector,
            store,
            stats,
            input_buffer: String::new(),
            custom_word: String::new(),
            input_mode: InputMode::Guessing,
            messages: Vec::new(),
            show_debug_info,
            share_origin,
            should_quit: false,
        };
        app.add_message(
            &format!("{}: guess the word!", app.session.mode()),
            MessageStyle::Info,
        );
        Ok(app)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn add_letter(&mut self, letter: char) {
        if letter.is_ascii_alphabetic() && self.input_buffer.len() < self.session.letter_limit() {
            self.input_buffer.push(letter.to_ascii_lowercase());
        }
    }

    pub fn remove_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed guess
    ///
    /// Rejected guesses keep the input so the player can fix it.
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        match self.session.submit_guess(&guess, &mut self.stats) {
            Ok(snapshot) => {
                self.input_buffer.clear();
                if snapshot.outcome.is_over() {
                    self.finish_game(&snapshot);
                }
            }
            Err(GameError::GameAlreadyOver) => self.input_mode = InputMode::GameOver,
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self, snapshot: &SessionSnapshot) {
        self.input_mode = InputMode::GameOver;

        let answer = snapshot
            .answer
            .as_ref()
            .map_or_else(String::new, |w| w.text().to_uppercase());
        if snapshot.outcome == Outcome::Won {
            let celebration = match snapshot.current_guess {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                n => format!("🎉 Solved {answer} in {n} guesses! 🎉"),
            };
            self.add_message(&celebration, MessageStyle::Success);
        } else {
            self.add_message(&format!("The word was {answer}"), MessageStyle::Error);
        }

        if let Err(e) = self.store.save(&self.stats) {
            warn!(error = %e, "failed to save statistics");
            self.add_message("Could not save statistics", MessageStyle::Error);
        }
        self.add_message(
            "t: today  r: random  c: custom word  q: quit",
            MessageStyle::Info,
        );
    }

    /// Start a new game for `request`
    pub fn new_game(&mut self, request: &TargetRequest) {
        let mut rng = rand::rng();
        match self.session.reset(&self.selector, request, &mut rng) {
            Ok(()) => {
                self.input_buffer.clear();
                self.input_mode = InputMode::Guessing;
                self.messages.clear();
                self.add_message(
                    &format!("New game: {}", self.session.mode()),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn begin_custom_word(&mut self) {
        self.input_mode = InputMode::CustomWord;
        self.custom_word.clear();
        self.add_message(
            &format!("Enter a custom word ({} letters)", self.session.letter_limit()),
            MessageStyle::Info,
        );
    }

    pub fn cancel_custom_word(&mut self) {
        self.custom_word.clear();
        self.input_mode = if self.session.outcome().is_over() {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        };
        self.add_message("Cancelled custom word entry", MessageStyle::Info);
    }

    /// Start a custom game with the typed word and show its share link
    pub fn use_custom_word(&mut self) {
        let word = std::mem::take(&mut self.custom_word);
        match WordSelector::custom_word(&word, self.session.letter_limit()) {
            Ok(valid) => {
                self.new_game(&TargetRequest::Custom(valid.text().to_string()));
                let link = custom_link(&self.share_origin, valid.text());
                self.add_message(&format!("Share: {link}"), MessageStyle::Success);
            }
            Err(e) => {
                self.custom_word = word;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('t') => self.new_game(&TargetRequest::today()),
                KeyCode::Char('r') => self.new_game(&TargetRequest::Random),
                KeyCode::Char('c') => self.begin_custom_word(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game(&TargetRequest::today());
                }
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game(&TargetRequest::Random);
                }
                KeyCode::Tab => self.begin_custom_word(),
                KeyCode::Char(c) if !is_chord(key) => self.add_letter(c),
                KeyCode::Backspace => self.remove_letter(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::CustomWord => match key.code {
                KeyCode::Esc | KeyCode::Tab => self.cancel_custom_word(),
                KeyCode::Char(c) if !is_chord(key) => {
                    if self.custom_word.len() < self.session.letter_limit()
                        && c.is_ascii_alphabetic()
                    {
                        self.custom_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.custom_word.pop();
                }
                KeyCode::Enter => self.use_custom_word(),
                _ => {}
            },
        }
    }
}

/// Control or Alt held: a shortcut, never a typed letter
fn is_chord(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Store<Statistics>>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: Store<Statistics>>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{DEFAULT_ROWS, GameMode};
    use crate::stats::MemoryStore;
    use crate::wordlists::Dictionary;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word<S: Store<Statistics>>(app: &mut App<'_, S>, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["hello", "crane", "slate"], 5).unwrap()
    }

    fn app<'a>(
        dictionary: &'a Dictionary,
        store: &'a MemoryStore<Statistics>,
    ) -> App<'a, MemoryStore<Statistics>> {
        let session = Session::with_target(
            dictionary,
            GameMode::Random,
            Word::new("hello").unwrap(),
            DEFAULT_ROWS,
        )
        .unwrap();
        App::new(
            session,
            WordSelector::default(),
            store,
            false,
            "https://wordle.example".into(),
        )
        .unwrap()
    }

    #[test]
    fn typing_is_capped_at_letter_limit() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);

        for c in "cranes1".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.input_buffer, "crane");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "cran");
    }

    #[test]
    fn rejected_guess_keeps_input_and_reports() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);

        type_word(&mut app, "cran");
        assert_eq!(app.input_buffer, "cran");
        assert_eq!(app.session.current_guess(), 0);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn winning_saves_statistics() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);

        type_word(&mut app, "crane");
        type_word(&mut app, "hello");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.session.outcome(), Outcome::Won);
        let saved: Statistics = store.load().unwrap();
        assert_eq!(saved.tally(GameMode::Random).win, 1);
    }

    #[test]
    fn game_over_keys_start_new_game() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);
        type_word(&mut app, "hello");

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.outcome(), Outcome::InProgress);
        assert_eq!(app.session.current_guess(), 0);
    }

    #[test]
    fn custom_word_entry_starts_custom_game() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.input_mode, InputMode::CustomWord);
        type_word(&mut app, "mango");

        assert_eq!(app.session.mode(), GameMode::Custom);
        assert_eq!(app.session.target().text(), "mango");
        assert!(app.messages.iter().any(|m| m.text.contains("?word=bWFuZ28=")));

        // The custom word is a valid guess in its own session
        type_word(&mut app, "mango");
        assert_eq!(app.session.outcome(), Outcome::Won);
    }

    #[test]
    fn short_custom_word_is_rejected() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);

        app.handle_key(key(KeyCode::Tab));
        type_word(&mut app, "man");

        assert_eq!(app.input_mode, InputMode::CustomWord);
        assert_eq!(app.custom_word, "man");
        assert_eq!(app.session.mode(), GameMode::Random);
    }

    #[test]
    fn control_chords_do_not_type_letters() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);

        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT));
        assert_eq!(app.input_buffer, "c");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL));
        assert_eq!(app.custom_word, "");

        // Shift is fine
        app.handle_key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
        assert_eq!(app.custom_word, "m");
    }

    #[test]
    fn ctrl_c_quits() {
        let dictionary = dictionary();
        let store = MemoryStore::new();
        let mut app = app(&dictionary, &store);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
