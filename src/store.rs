//! Persisted word store
//!
//! Words and game results live in a single JSON document on disk, loaded
//! when the store is opened and rewritten after every mutation. The
//! application opens one store at startup and passes the handle into
//! session start explicitly; there is no global store.

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::Word;

/// A word row: identity, canonical text and its flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWord {
    pub id: u64,
    pub text: String,
    pub enabled: bool,
    pub nsfw: bool,
    pub created_at: DateTime<Utc>,
}

impl StoredWord {
    /// Parse the stored text back into a [`Word`]
    ///
    /// # Errors
    /// Returns a `WordError` if the stored text was corrupted on disk.
    pub fn word(&self) -> Result<Word, crate::core::WordError> {
        Word::new(&self.text)
    }
}

/// A finished game: which word, and in how many rounds (None = lost)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub word_id: u64,
    pub rounds_used: Option<u8>,
    pub played_at: DateTime<Utc>,
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read or write the store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("No word with id {0} in the store")]
    UnknownWordId(u64),
}

/// On-disk document layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    words: Vec<StoredWord>,
    results: Vec<GameRecord>,
}

/// Handle to the word store
///
/// `path == None` is the in-memory mode used by tests: all operations
/// behave identically but nothing is written to disk.
#[derive(Debug)]
pub struct WordStore {
    path: Option<PathBuf>,
    words: Vec<StoredWord>,
    results: Vec<GameRecord>,
    next_id: u64,
}

impl WordStore {
    /// Open (or create) a store at the given path
    ///
    /// A missing file yields an empty store; it is created on the first
    /// mutation.
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or is
    /// not valid JSON.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let file = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str::<StoreFile>(&content)?
        } else {
            StoreFile::default()
        };

        let next_id = file.words.iter().map(|w| w.id).max().map_or(1, |id| id + 1);

        info!(
            "Opened store at {} ({} words, {} results)",
            path.display(),
            file.words.len(),
            file.results.len()
        );

        Ok(Self {
            path: Some(path),
            words: file.words,
            results: file.results,
            next_id,
        })
    }

    /// Create an in-memory store that never touches disk
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            words: Vec::new(),
            results: Vec::new(),
            next_id: 1,
        }
    }

    /// Default store location under the platform data directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("wortle").join("words.json"))
    }

    fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = StoreFile {
            words: self.words.clone(),
            results: self.results.clone(),
        };
        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        debug!("Saved store to {}", path.display());
        Ok(())
    }

    /// Insert a word, skipping it if the text already exists
    ///
    /// Returns `true` if the word was added, `false` if it was already
    /// present. Uniqueness is on the canonical uppercase text.
    ///
    /// # Errors
    /// Returns `StoreError` if persisting the change fails.
    pub fn insert_ignore_duplicates(&mut self, word: &Word) -> Result<bool, StoreError> {
        if self.find_by_text(word.text()).is_some() {
            return Ok(false);
        }

        self.words.push(StoredWord {
            id: self.next_id,
            text: word.text().to_string(),
            enabled: true,
            nsfw: false,
            created_at: Utc::now(),
        });
        self.next_id += 1;
        self.save()?;
        Ok(true)
    }

    /// Bulk insert, skipping duplicates; returns the number actually added
    ///
    /// The store file is written once at the end, not per word.
    ///
    /// # Errors
    /// Returns `StoreError` if persisting the change fails.
    pub fn insert_many(&mut self, words: &[Word]) -> Result<usize, StoreError> {
        let mut added = 0;
        for word in words {
            if self.find_by_text(word.text()).is_some() {
                continue;
            }
            self.words.push(StoredWord {
                id: self.next_id,
                text: word.text().to_string(),
                enabled: true,
                nsfw: false,
                created_at: Utc::now(),
            });
            self.next_id += 1;
            added += 1;
        }

        if added > 0 {
            self.save()?;
        }
        info!("Inserted {added} of {} words", words.len());
        Ok(added)
    }

    /// Delete a word and its results
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownWordId`] if no word has this id.
    pub fn delete_word(&mut self, word_id: u64) -> Result<(), StoreError> {
        let index = self
            .words
            .iter()
            .position(|w| w.id == word_id)
            .ok_or(StoreError::UnknownWordId(word_id))?;

        self.words.remove(index);
        self.results.retain(|r| r.word_id != word_id);
        self.save()
    }

    /// Set the enabled flag of a word
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownWordId`] if no word has this id.
    pub fn set_enabled(&mut self, word_id: u64, enabled: bool) -> Result<(), StoreError> {
        self.find_by_id_mut(word_id)?.enabled = enabled;
        self.save()
    }

    /// Set the sensitive-content flag of a word
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownWordId`] if no word has this id.
    pub fn set_nsfw(&mut self, word_id: u64, nsfw: bool) -> Result<(), StoreError> {
        self.find_by_id_mut(word_id)?.nsfw = nsfw;
        self.save()
    }

    /// Draw a random word, honoring the eligibility flags
    ///
    /// Disabled words are skipped unless `allow_disabled`; nsfw words are
    /// skipped unless `allow_nsfw`. Returns `None` if no word qualifies.
    #[must_use]
    pub fn random_word(&self, allow_nsfw: bool, allow_disabled: bool) -> Option<&StoredWord> {
        let eligible: Vec<&StoredWord> = self
            .words
            .iter()
            .filter(|w| (allow_nsfw || !w.nsfw) && (allow_disabled || w.enabled))
            .collect();

        eligible.choose(&mut rand::rng()).copied()
    }

    /// Check whether a word with this text exists (any flags)
    ///
    /// The text is normalized before comparison, so `"katze"` matches a
    /// stored `"KATZE"`.
    #[must_use]
    pub fn word_exists(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.find_by_text(word.text()).is_some())
    }

    /// Record a finished game for a word
    ///
    /// `rounds_used` is the winning round count, or `None` for a loss.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownWordId`] if no word has this id.
    pub fn record_result(
        &mut self,
        word_id: u64,
        rounds_used: Option<u8>,
    ) -> Result<(), StoreError> {
        if !self.words.iter().any(|w| w.id == word_id) {
            return Err(StoreError::UnknownWordId(word_id));
        }

        self.results.push(GameRecord {
            word_id,
            rounds_used,
            played_at: Utc::now(),
        });
        self.save()
    }

    /// All words, in insertion order
    #[must_use]
    pub fn words(&self) -> &[StoredWord] {
        &self.words
    }

    /// All recorded results, in play order
    #[must_use]
    pub fn results(&self) -> &[GameRecord] {
        &self.results
    }

    /// Number of stored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the store holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn find_by_text(&self, canonical: &str) -> Option<&StoredWord> {
        self.words.iter().find(|w| w.text == canonical)
    }

    fn find_by_id_mut(&mut self, word_id: u64) -> Result<&mut StoredWord, StoreError> {
        self.words
            .iter_mut()
            .find(|w| w.id == word_id)
            .ok_or(StoreError::UnknownWordId(word_id))
    }
}
