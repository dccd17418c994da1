//! Core game engine
//!
//! Pure domain types with no I/O: words, guess evaluation, keyboard
//! aggregation and the round state machine. Everything here is
//! deterministic and safe to call from any thread.

mod game;
mod keyboard;
mod verdict;
mod word;

pub use game::{GameState, GuessRecord, InvalidState, MAX_ROUNDS, Phase, Turn};
pub use keyboard::KeyboardState;
pub use verdict::{GuessResult, Verdict, evaluate};
pub use word::{WORD_LEN, Word, WordError, canonical_upper, is_allowed_letter};
