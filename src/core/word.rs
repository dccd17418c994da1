//! Word representation
//!
//! A `Word` is a 5-letter German word in canonical uppercase form.
//! The alphabet is A–Z plus the extended letters Ä, Ö, Ü and ß.

use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed word length for the whole game
pub const WORD_LEN: usize = 5;

/// A 5-letter word in canonical uppercase form
///
/// Construction validates length and alphabet, so every `Word` in the
/// program is known to be exactly [`WORD_LEN`] allowed letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Word contains character '{ch}' outside A-Z, Ä, Ö, Ü, ß")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Map a character to its canonical uppercase form
///
/// ASCII letters and umlauts map to their uppercase variant; ß has no
/// single-character uppercase mapping and is kept as-is.
#[must_use]
pub fn canonical_upper(ch: char) -> char {
    match ch {
        'ä' => 'Ä',
        'ö' => 'Ö',
        'ü' => 'Ü',
        'ß' => 'ß',
        c if c.is_ascii_lowercase() => c.to_ascii_uppercase(),
        c => c,
    }
}

/// Check whether a character belongs to the canonical alphabet
#[must_use]
pub fn is_allowed_letter(ch: char) -> bool {
    matches!(ch, 'A'..='Z' | 'Ä' | 'Ö' | 'Ü' | 'ß')
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to canonical uppercase before validation, so
    /// `"katze"`, `"Katze"` and `"KATZE"` all construct the same Word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LEN`] characters
    /// - Any character falls outside A–Z, Ä, Ö, Ü, ß
    ///
    /// # Examples
    /// ```
    /// use wortle::core::Word;
    ///
    /// let word = Word::new("katze").unwrap();
    /// assert_eq!(word.text(), "KATZE");
    ///
    /// assert!(Word::new("zu lang").is_err());
    /// assert!(Word::new("k4tze").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let normalized: String = text.as_ref().chars().map(canonical_upper).collect();

        let chars: Vec<char> = normalized.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if let Some(&bad) = chars.iter().find(|c| !is_allowed_letter(**c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters: [char; WORD_LEN] = chars.try_into().expect("length already validated");

        Ok(Self {
            text: normalized,
            letters,
        })
    }

    /// Get the word as a string slice (canonical uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LEN] {
        &self.letters
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LEN`]
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator's duplicate-letter handling.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("KATZE").unwrap();
        assert_eq!(word.text(), "KATZE");
        assert_eq!(word.letters(), &['K', 'A', 'T', 'Z', 'E']);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("katze").unwrap();
        assert_eq!(word.text(), "KATZE");

        let word2 = Word::new("KaTzE").unwrap();
        assert_eq!(word2.text(), "KATZE");
    }

    #[test]
    fn word_creation_umlauts() {
        let word = Word::new("äpfel").unwrap();
        assert_eq!(word.text(), "ÄPFEL");
        assert_eq!(word.letter_at(0), 'Ä');
    }

    #[test]
    fn word_creation_eszett_preserved() {
        // ß has no single-char uppercase form and stays ß
        let word = Word::new("grüße").unwrap();
        assert_eq!(word.text(), "GRÜßE");
        assert_eq!(word.letter_at(3), 'ß');
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("zu lang"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(Word::new("ENTE"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        // MÄUSE is 5 characters but 6 bytes in UTF-8
        let word = Word::new("MÄUSE").unwrap();
        assert_eq!(word.letters().len(), 5);
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("K4TZE"),
            Err(WordError::InvalidCharacter('4'))
        ));
        assert!(Word::new("KATZ ").is_err()); // Space
        assert!(Word::new("KATZ!").is_err()); // Punctuation
        assert!(Word::new("ÉCLAT").is_err()); // Non-German accent
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("KATZE").unwrap();
        assert!(word.has_letter('K'));
        assert!(word.has_letter('Z'));
        assert!(!word.has_letter('X'));
        // Lookup is on the canonical form only
        assert!(!word.has_letter('k'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("ALLEE").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'A'), Some(&1));
        assert_eq!(counts.get(&'L'), Some(&2));
        assert_eq!(counts.get(&'E'), Some(&2));
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("hunde").unwrap();
        let word2 = Word::new("HUNDE").unwrap();
        let word3 = Word::new("HASEN").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("vogel").unwrap();
        assert_eq!(format!("{word}"), "VOGEL");
    }
}
