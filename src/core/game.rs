//! Round state machine
//!
//! A game holds one immutable secret and accepts up to [`MAX_ROUNDS`]
//! evaluated guesses. Guess validity (is this a known word?) is the
//! caller's concern; everything that reaches [`GameState::submit`] costs
//! a round.

use std::fmt;

use super::keyboard::KeyboardState;
use super::verdict::{GuessResult, evaluate};
use super::word::Word;

/// Maximum number of guesses per game
pub const MAX_ROUNDS: u8 = 6;

/// One accepted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub result: GuessResult,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the guess of the given round (1-based, up to MAX_ROUNDS)
    AwaitingGuess { round: u8 },
    /// Secret found in `rounds_used` rounds. Terminal.
    Won { rounds_used: u8 },
    /// All rounds exhausted without finding the secret. Terminal.
    Lost,
}

impl Phase {
    /// True for [`Phase::Won`] and [`Phase::Lost`]
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost)
    }
}

/// Error for a guess submitted after the game ended
///
/// This is a caller bug, not a recoverable game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidState;

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guess submitted after the game reached a terminal state")
    }
}

impl std::error::Error for InvalidState {}

/// Outcome of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub result: GuessResult,
    pub keyboard: KeyboardState,
    pub phase: Phase,
}

/// A single game: secret, round counter and guess history
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    phase: Phase,
    history: Vec<GuessRecord>,
}

impl GameState {
    /// Start a game in round 1 with the given secret
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            phase: Phase::AwaitingGuess { round: 1 },
            history: Vec::with_capacity(MAX_ROUNDS as usize),
        }
    }

    /// Submit an already-validated guess word
    ///
    /// Evaluates the guess, appends it to the history and advances the
    /// state machine: all-correct wins, an incorrect guess in the last
    /// round loses, anything else moves to the next round.
    ///
    /// # Errors
    /// Returns [`InvalidState`] if the game is already Won or Lost.
    pub fn submit(&mut self, guess: Word) -> Result<Turn, InvalidState> {
        let Phase::AwaitingGuess { round } = self.phase else {
            return Err(InvalidState);
        };

        let result = evaluate(&self.secret, &guess);
        self.history.push(GuessRecord { guess, result });

        self.phase = if result.is_win() {
            Phase::Won { rounds_used: round }
        } else if round == MAX_ROUNDS {
            Phase::Lost
        } else {
            Phase::AwaitingGuess { round: round + 1 }
        };

        Ok(Turn {
            result,
            keyboard: self.keyboard(),
            phase: self.phase,
        })
    }

    /// The secret this game's guesses are evaluated against
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the game is Won or Lost
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Rounds needed to win, or `None` for a lost or running game
    ///
    /// This is the value persisted to the result store on a terminal
    /// transition.
    #[inline]
    #[must_use]
    pub const fn rounds_used(&self) -> Option<u8> {
        match self.phase {
            Phase::Won { rounds_used } => Some(rounds_used),
            Phase::AwaitingGuess { .. } | Phase::Lost => None,
        }
    }

    /// All accepted guesses so far, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Keyboard state reduced from the full history
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::reduce(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_game_starts_in_round_one() {
        let game = GameState::new(word("KATZE"));
        assert_eq!(game.phase(), Phase::AwaitingGuess { round: 1 });
        assert!(!game.is_terminal());
        assert!(game.history().is_empty());
        assert_eq!(game.rounds_used(), None);
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let mut game = GameState::new(word("KATZE"));
        let turn = game.submit(word("KATZE")).unwrap();

        assert!(turn.result.is_win());
        assert_eq!(turn.phase, Phase::Won { rounds_used: 1 });
        assert!(game.is_terminal());
        assert_eq!(game.rounds_used(), Some(1));
    }

    #[test]
    fn wrong_guess_advances_round() {
        let mut game = GameState::new(word("KATZE"));
        let turn = game.submit(word("HUNDE")).unwrap();

        assert_eq!(turn.phase, Phase::AwaitingGuess { round: 2 });
        assert_eq!(game.history().len(), 1);
        assert!(!game.is_terminal());
    }

    #[test]
    fn win_in_later_round_records_round_count() {
        let mut game = GameState::new(word("KATZE"));
        game.submit(word("HUNDE")).unwrap();
        game.submit(word("TIGER")).unwrap();
        let turn = game.submit(word("KATZE")).unwrap();

        assert_eq!(turn.phase, Phase::Won { rounds_used: 3 });
        assert_eq!(game.rounds_used(), Some(3));
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut game = GameState::new(word("KATZE"));
        let wrong = ["HUNDE", "TIGER", "VOGEL", "BLUME", "STURM", "HONIG"];

        for (i, guess) in wrong.iter().enumerate() {
            let turn = game.submit(word(guess)).unwrap();
            if i + 1 < usize::from(MAX_ROUNDS) {
                let round = u8::try_from(i + 2).unwrap();
                assert_eq!(turn.phase, Phase::AwaitingGuess { round });
            } else {
                assert_eq!(turn.phase, Phase::Lost);
            }
        }

        assert!(game.is_terminal());
        // Losses persist no round count
        assert_eq!(game.rounds_used(), None);
    }

    #[test]
    fn win_in_final_round() {
        let mut game = GameState::new(word("KATZE"));
        for guess in ["HUNDE", "TIGER", "VOGEL", "BLUME", "STURM"] {
            game.submit(word(guess)).unwrap();
        }

        let turn = game.submit(word("KATZE")).unwrap();
        assert_eq!(turn.phase, Phase::Won { rounds_used: 6 });
        assert_eq!(game.rounds_used(), Some(6));
    }

    #[test]
    fn submit_after_terminal_is_invalid_state() {
        let mut game = GameState::new(word("KATZE"));
        game.submit(word("KATZE")).unwrap();

        assert_eq!(game.submit(word("HUNDE")), Err(InvalidState));
        // History is untouched by the rejected call
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn terminates_within_max_rounds() {
        // Any sequence of valid non-winning guesses ends in Lost after
        // MAX_ROUNDS submissions; the next call is rejected
        let mut game = GameState::new(word("KATZE"));
        for _ in 0..MAX_ROUNDS {
            game.submit(word("HUNDE")).unwrap();
        }

        assert_eq!(game.phase(), Phase::Lost);
        assert!(game.submit(word("HUNDE")).is_err());
    }

    #[test]
    fn turn_keyboard_reflects_full_history() {
        let mut game = GameState::new(word("KATZE"));
        game.submit(word("TULPE")).unwrap();
        let turn = game.submit(word("KATER")).unwrap();

        // T was Present in round 1 and Correct in round 2
        assert_eq!(turn.keyboard.verdict_for('T'), Some(Verdict::Correct));
        assert_eq!(turn.keyboard.verdict_for('U'), Some(Verdict::Absent));
    }
}
