//! Game session
//!
//! Bridges the word store and the pure game engine: drawing the secret,
//! validating submitted text against the store's word set, and persisting
//! the result exactly once when the game ends. The session does not hold
//! the store handle; every call that needs the store takes it explicitly.

use log::{debug, info};
use thiserror::Error;

use crate::core::{GameState, GuessRecord, KeyboardState, Phase, Turn, WORD_LEN, Word, WordError};
use crate::store::{StoreError, WordStore};

/// Eligibility flags for the secret draw
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawOptions {
    pub allow_nsfw: bool,
    pub allow_disabled: bool,
}

/// Session errors
///
/// `LengthMismatch` and `NotAWord` are recoverable: the round is not
/// consumed and the player is re-prompted. The rest are fatal to the call.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Guess must be {expected} letters, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("'{0}' is not in the word list")]
    NotAWord(String),

    #[error("The store has no eligible word to play")]
    NoWordsAvailable,

    #[error("Guess submitted after the game ended")]
    InvalidState,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One game against a word drawn from the store
#[derive(Debug)]
pub struct Session {
    game: GameState,
    word_id: u64,
    options: DrawOptions,
}

impl Session {
    /// Start a session by drawing a random secret from the store
    ///
    /// # Errors
    /// Returns [`SessionError::NoWordsAvailable`] if no stored word passes
    /// the eligibility flags.
    pub fn start(store: &WordStore, options: DrawOptions) -> Result<Self, SessionError> {
        let stored = store
            .random_word(options.allow_nsfw, options.allow_disabled)
            .ok_or(SessionError::NoWordsAvailable)?;

        // A stored word that no longer parses (hand-edited store file)
        // is not eligible either.
        let secret = stored.word().map_err(|_| SessionError::NoWordsAvailable)?;

        info!("Started session for word id {}", stored.id);
        Ok(Self {
            game: GameState::new(secret),
            word_id: stored.id,
            options,
        })
    }

    /// Submit raw guess text
    ///
    /// Text is normalized to canonical uppercase first. Wrong length is
    /// [`SessionError::LengthMismatch`]; text that is not in the store's
    /// word set is [`SessionError::NotAWord`]; neither consumes a round.
    /// On the terminal transition, the result is recorded to the store
    /// (rounds used for a win, nothing for a loss).
    ///
    /// # Errors
    /// See [`SessionError`] for the full contract.
    pub fn submit(&mut self, store: &mut WordStore, text: &str) -> Result<Turn, SessionError> {
        let guess = match Word::new(text) {
            Ok(word) => word,
            Err(WordError::InvalidLength(got)) => {
                return Err(SessionError::LengthMismatch {
                    expected: WORD_LEN,
                    got,
                });
            }
            // Text over a foreign alphabet cannot be a stored word
            Err(WordError::InvalidCharacter(_)) => {
                return Err(SessionError::NotAWord(text.to_string()));
            }
        };

        if !store.word_exists(guess.text()) {
            debug!("Rejected unknown word '{guess}'");
            return Err(SessionError::NotAWord(guess.text().to_string()));
        }

        let turn = self
            .game
            .submit(guess)
            .map_err(|_| SessionError::InvalidState)?;

        if turn.phase.is_terminal() {
            store.record_result(self.word_id, self.game.rounds_used())?;
            info!(
                "Session for word id {} ended: {:?}",
                self.word_id, turn.phase
            );
        }

        Ok(turn)
    }

    /// Current phase of the underlying game
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// True once the game is Won or Lost
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.game.is_terminal()
    }

    /// The secret word (revealed to the player after a loss)
    #[must_use]
    pub fn secret(&self) -> &Word {
        self.game.secret()
    }

    /// Accepted guesses so far
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        self.game.history()
    }

    /// Keyboard state reduced from the full history
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        self.game.keyboard()
    }

    /// Draw options the session was started with
    #[must_use]
    pub const fn options(&self) -> DrawOptions {
        self.options
    }
}
