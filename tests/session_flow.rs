//! End-to-end game flows through the public API

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;
use wordle_game::core::LetterMatch;
use wordle_game::game::{
    DEFAULT_EPOCH, DEFAULT_ROWS, GameError, GameMode, Outcome, Session, TargetRequest,
    WordSelector,
};
use wordle_game::share::{custom_link, decode_custom_link, parse_statistics_link, statistics_link};
use wordle_game::stats::{JsonFileStore, Statistics, Store};
use wordle_game::wordlists::{Dictionary, WORDS};

fn embedded() -> Dictionary {
    Dictionary::embedded(5).unwrap()
}

#[test]
fn word_of_the_day_walks_the_dictionary_in_order() {
    let dictionary = embedded();
    let selector = WordSelector::default();

    assert_eq!(selector.word_of_day(&dictionary, DEFAULT_EPOCH).text(), WORDS[0]);

    let next_day = DEFAULT_EPOCH.succ_opt().unwrap();
    assert_eq!(selector.word_of_day(&dictionary, next_day).text(), WORDS[1]);

    // One full cycle later the sequence repeats
    let cycle = DEFAULT_EPOCH + chrono::Days::new(WORDS.len() as u64);
    assert_eq!(selector.word_of_day(&dictionary, cycle).text(), WORDS[0]);
}

#[test]
fn daily_game_is_the_same_for_everyone() {
    let dictionary = embedded();
    let selector = WordSelector::default();
    let request = TargetRequest::WordOfTheDay(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());

    let start = |seed| {
        Session::start(
            &dictionary,
            &selector,
            &request,
            DEFAULT_ROWS,
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    };
    let first = start(1);
    let second = start(99);

    assert_eq!(first.target(), second.target());
    assert_eq!(first.mode(), GameMode::WordOfTheDay);
}

#[test]
fn losing_game_updates_persisted_statistics() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("statistics.json"));
    let dictionary = embedded();
    let selector = WordSelector::default();
    let mut statistics: Statistics = store.load().unwrap();

    let mut session = Session::start(
        &dictionary,
        &selector,
        &TargetRequest::Custom("Mango".into()),
        DEFAULT_ROWS,
        &mut rand::rng(),
    )
    .unwrap();

    for _ in 0..DEFAULT_ROWS {
        session.submit_guess("crane", &mut statistics).unwrap();
    }
    assert_eq!(session.outcome(), Outcome::Lost);
    assert!(matches!(
        session.submit_guess("mango", &mut statistics),
        Err(GameError::GameAlreadyOver)
    ));

    store.save(&statistics).unwrap();
    let reloaded: Statistics = store.load().unwrap();
    assert_eq!(reloaded.tally(GameMode::Custom).lose, 1);
    assert_eq!(reloaded.tally(GameMode::Custom).win, 0);
    assert_eq!(reloaded.overall().total(), 1);
}

#[test]
fn shared_custom_word_can_be_played_and_won() {
    let dictionary = embedded();
    let selector = WordSelector::default();
    let mut statistics = Statistics::new();

    let link = custom_link("https://wordle.example", "zzzzz");
    let word = decode_custom_link(&link).unwrap();

    let mut session = Session::start(
        &dictionary,
        &selector,
        &TargetRequest::Custom(word),
        DEFAULT_ROWS,
        &mut rand::rng(),
    )
    .unwrap();

    // Not a dictionary word, but it is the target of this custom game
    let snapshot = session.submit_guess("zzzzz", &mut statistics).unwrap();
    assert_eq!(snapshot.outcome, Outcome::Won);
    assert!(
        snapshot.guesses[0]
            .feedback
            .matches()
            .iter()
            .all(|&m| m == LetterMatch::Correct)
    );
    assert_eq!(statistics.tally(GameMode::Custom).win, 1);

    // Outside a custom game it is still unknown
    session
        .reset(&selector, &TargetRequest::Random, &mut StdRng::seed_from_u64(3))
        .unwrap();
    assert!(matches!(
        session.submit_guess("zzzzz", &mut statistics),
        Err(GameError::UnknownWord(_))
    ));
}

#[test]
fn statistics_survive_an_export_link() {
    let dictionary = embedded();
    let mut statistics = Statistics::new();
    let mut session = Session::start(
        &dictionary,
        &WordSelector::default(),
        &TargetRequest::Custom("hello".into()),
        DEFAULT_ROWS,
        &mut rand::rng(),
    )
    .unwrap();
    session.submit_guess("hello", &mut statistics).unwrap();

    let link = statistics_link("https://wordle.example", &statistics).unwrap();
    assert_eq!(parse_statistics_link(&link).unwrap(), statistics);
}

#[test]
fn rejected_guesses_do_not_use_a_row() {
    let dictionary = embedded();
    let mut statistics = Statistics::new();
    let mut session = Session::start(
        &dictionary,
        &WordSelector::default(),
        &TargetRequest::Random,
        DEFAULT_ROWS,
        &mut StdRng::seed_from_u64(7),
    )
    .unwrap();

    assert!(matches!(
        session.submit_guess("cra", &mut statistics),
        Err(GameError::IncompleteGuess { expected: 5, actual: 3 })
    ));
    assert!(matches!(
        session.submit_guess("qqqqq", &mut statistics),
        Err(GameError::UnknownWord(_))
    ));
    assert_eq!(session.current_guess(), 0);
    assert_eq!(session.outcome(), Outcome::InProgress);
}
