//! Game rules
//!
//! Target selection, the session state machine and the errors a player can
//! run into while playing.

mod error;
pub mod selector;
pub mod session;

pub use error::GameError;
pub use selector::{DEFAULT_EPOCH, GameMode, TargetRequest, WordSelector};
pub use session::{
    DEFAULT_ROWS, GameResult, GuessRecord, Outcome, OutcomeListener, Session, SessionSnapshot,
};
