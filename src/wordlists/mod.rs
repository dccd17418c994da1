//! Word list ingestion
//!
//! The embedded seed list plus parsers for external word lists; all
//! candidates run through the same normalization before they reach the
//! store.

mod embedded;
pub mod loader;

pub use embedded::{SEED_WORDS, SEED_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn seed_count_matches_const() {
        assert_eq!(SEED_WORDS.len(), SEED_WORDS_COUNT);
    }

    #[test]
    fn seed_words_are_valid() {
        for &word in SEED_WORDS {
            assert!(Word::new(word).is_ok(), "Seed word '{word}' is invalid");
        }
    }

    #[test]
    fn seed_words_are_canonical_uppercase() {
        for &word in SEED_WORDS {
            let canonical = Word::new(word).unwrap();
            assert_eq!(
                canonical.text(),
                word,
                "Seed word '{word}' is not stored in canonical form"
            );
        }
    }

    #[test]
    fn seed_words_are_unique() {
        let set: std::collections::HashSet<_> = SEED_WORDS.iter().collect();
        assert_eq!(set.len(), SEED_WORDS.len());
    }

    #[test]
    fn seed_contains_known_words() {
        assert!(SEED_WORDS.contains(&"KATZE"));
        assert!(SEED_WORDS.contains(&"HUNDE"));
    }
}
