//! Guess evaluation
//!
//! Evaluates a guess against a secret word and yields one verdict per
//! position, with Wordle's duplicate-letter tie-break: exact matches are
//! claimed first, then remaining secret letters are consumed left-to-right
//! so a repeated guess letter is never credited more often than it occurs
//! in the secret.

use super::word::{WORD_LEN, Word};

/// Per-position judgment of a guess letter against the secret
///
/// The variants carry an explicit display priority used only by the
/// keyboard reduction: `Correct` beats `Present` beats `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter is in the secret at this exact position
    Correct,
    /// Letter is in the secret, but at a different position
    Present,
    /// Letter is not in the secret (or all its occurrences are used up)
    Absent,
}

impl Verdict {
    /// Display priority; lower wins
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 1,
            Self::Present => 2,
            Self::Absent => 3,
        }
    }

    /// Combine two verdicts for the same letter, keeping the better one
    ///
    /// This is the only place the priority order is relied upon.
    #[inline]
    #[must_use]
    pub fn best(self, other: Self) -> Self {
        if other.priority() < self.priority() {
            other
        } else {
            self
        }
    }
}

/// Ordered verdicts for one submitted guess, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([Verdict; WORD_LEN]);

impl GuessResult {
    /// The verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    /// Verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LEN`]
    #[inline]
    #[must_use]
    pub const fn verdict_at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// True if every position is [`Verdict::Correct`]
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|v| *v == Verdict::Correct)
    }

    /// Iterate over the verdicts in position order
    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = Verdict;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Verdict>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Evaluate a guess against the secret
///
/// Both arguments are [`Word`]s, so the length precondition is enforced by
/// the type; raw text of the wrong length is rejected before it gets here
/// (see `session::SessionError::LengthMismatch`). Comparison is over the
/// canonical uppercase form only.
///
/// # Algorithm
/// 1. First pass: mark exact position matches and remove each matched
///    letter from a multiset of the secret's letters.
/// 2. Second pass (left-to-right): a non-exact guess letter is `Present`
///    if the multiset still holds an occurrence, consuming it; otherwise
///    `Absent`.
///
/// The consume-once rule means that when the guess repeats a letter more
/// often than the secret contains it, only the leftmost non-exact
/// occurrences are credited.
///
/// # Examples
/// ```
/// use wortle::core::{Verdict, Word, evaluate};
///
/// let secret = Word::new("KATZE").unwrap();
/// let guess = Word::new("KATER").unwrap();
/// let result = evaluate(&secret, &guess);
///
/// assert_eq!(result.verdict_at(0), Verdict::Correct);
/// assert_eq!(result.verdict_at(3), Verdict::Present); // E sits at position 4
/// assert_eq!(result.verdict_at(4), Verdict::Absent); // no R in KATZE
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> GuessResult {
    let mut verdicts = [Verdict::Absent; WORD_LEN];
    let mut remaining = secret.letter_counts();

    // First pass: exact matches, consuming from the pool
    // Allow: index needed to compare guess[i] with secret[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.letter_at(i) == secret.letter_at(i) {
            verdicts[i] = Verdict::Correct;

            if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: presence matches from what the exact pass left over
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if verdicts[i] != Verdict::Correct {
            let letter = guess.letter_at(i);
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }
    }

    GuessResult(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn verdict_priority_order() {
        assert!(Correct.priority() < Present.priority());
        assert!(Present.priority() < Absent.priority());
    }

    #[test]
    fn verdict_best_keeps_higher_priority() {
        assert_eq!(Absent.best(Present), Present);
        assert_eq!(Present.best(Correct), Correct);
        assert_eq!(Correct.best(Absent), Correct);
        assert_eq!(Present.best(Present), Present);
    }

    #[test]
    fn evaluate_guess_equals_secret() {
        let secret = word("KATZE");
        let result = evaluate(&secret, &secret);

        assert!(result.is_win());
        assert_eq!(result.verdicts(), &[Correct; 5]);
    }

    #[test]
    fn evaluate_no_shared_letters() {
        let secret = word("KATZE");
        let guess = word("HONIG");
        let result = evaluate(&secret, &guess);

        assert_eq!(result.verdicts(), &[Absent; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn evaluate_katze_kater() {
        // K, A, T exact; E is present at a different position; R absent
        let result = evaluate(&word("KATZE"), &word("KATER"));
        assert_eq!(
            result.verdicts(),
            &[Correct, Correct, Correct, Present, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_consume_once() {
        // secret ALLEE, guess LOLLY:
        //   pass 1: position 2 L is exact; pool is then A:1, L:1, E:2
        //   pass 2: position 0 L consumes the last L -> Present
        //           position 1 O -> Absent
        //           position 3 L finds the pool empty -> Absent
        //           position 4 Y -> Absent
        let result = evaluate(&word("ALLEE"), &word("LOLLY"));
        assert_eq!(
            result.verdicts(),
            &[Present, Absent, Correct, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_repeated_guess_letter_single_in_secret() {
        // secret SALAT, guess TASSE: T present, A exact, first S present,
        // second S finds no S left -> Absent, E absent
        let result = evaluate(&word("SALAT"), &word("TASSE"));
        assert_eq!(
            result.verdicts(),
            &[Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_exact_match_consumes_before_presence() {
        // secret WELLE, guess SEELE:
        //   exact: position 2 L? WELLE = W,E,L,L,E; SEELE = S,E,E,L,E
        //   exact matches at 1 (E), 3 (L), 4 (E); pool left: W:1, L:1
        //   position 0 S -> Absent; position 2 E -> no E left -> Absent
        let result = evaluate(&word("WELLE"), &word("SEELE"));
        assert_eq!(
            result.verdicts(),
            &[Absent, Correct, Absent, Correct, Correct]
        );
    }

    #[test]
    fn evaluate_umlaut_letters() {
        // Ä, E and L line up exactly; R and M are absent
        let result = evaluate(&word("ÄPFEL"), &word("ÄRMEL"));
        assert_eq!(
            result.verdicts(),
            &[Correct, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn evaluate_result_length_always_word_len() {
        let pairs = [("KATZE", "HUNDE"), ("ALLEE", "ALLEE"), ("GRÜßE", "SOßEN")];
        for (secret, guess) in pairs {
            let result = evaluate(&word(secret), &word(guess));
            assert_eq!(result.verdicts().len(), WORD_LEN);
        }
    }

    #[test]
    fn evaluate_deterministic() {
        let secret = word("BLUME");
        let guess = word("BEERE");
        assert_eq!(evaluate(&secret, &guess), evaluate(&secret, &guess));
    }
}
