//! Keyboard state aggregation
//!
//! Reduces the verdicts of all guesses submitted so far to one best-known
//! verdict per letter, used to color the on-screen keyboard. The reduction
//! is recomputed from scratch on every call, so replaying the same history
//! always yields the same state.

use rustc_hash::FxHashMap;

use super::game::GuessRecord;
use super::verdict::Verdict;

/// Best-known verdict per guessed letter
///
/// Letters that were never guessed are absent from the map; that neutral
/// state is distinct from [`Verdict::Absent`], which records that the
/// letter was tried and is not in the secret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, Verdict>,
}

impl KeyboardState {
    /// Reduce a guess history to the best verdict ever observed per letter
    ///
    /// A letter's state never regresses: once it has been seen as
    /// [`Verdict::Correct`] anywhere, no later `Present` or `Absent`
    /// verdict for the same letter lowers it.
    #[must_use]
    pub fn reduce(history: &[GuessRecord]) -> Self {
        let mut letters: FxHashMap<char, Verdict> = FxHashMap::default();

        for record in history {
            for (letter, verdict) in record.guess.letters().iter().zip(record.result.iter()) {
                letters
                    .entry(*letter)
                    .and_modify(|best| *best = best.best(verdict))
                    .or_insert(verdict);
            }
        }

        Self { letters }
    }

    /// Best-known verdict for a letter, or `None` if it was never guessed
    #[inline]
    #[must_use]
    pub fn verdict_for(&self, letter: char) -> Option<Verdict> {
        self.letters.get(&letter).copied()
    }

    /// Number of distinct letters guessed so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True before any guess has been submitted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate over (letter, best verdict) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.letters.iter().map(|(l, v)| (*l, *v))
    }
}
