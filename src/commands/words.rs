//! Word administration
//!
//! Maintenance surface for the word store: listing, adding, flagging and
//! deleting words.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::Word;
use crate::store::WordStore;

/// Print all stored words with their flags and play counts
pub fn run_list(store: &WordStore) {
    if store.is_empty() {
        println!("The store is empty. Run 'wortle import' first.");
        return;
    }

    println!(
        "{:>5}  {:<7}  {:^7}  {:^4}  {:>5}  {}",
        "ID", "WORD", "ENABLED", "NSFW", "PLAYS", "ADDED"
    );
    for word in store.words() {
        let plays = store
            .results()
            .iter()
            .filter(|r| r.word_id == word.id)
            .count();
        let enabled = if word.enabled { "yes" } else { "no" };
        let nsfw = if word.nsfw { "yes" } else { "-" };

        println!(
            "{:>5}  {:<7}  {:^7}  {:^4}  {:>5}  {}",
            word.id,
            word.text,
            enabled,
            nsfw,
            plays,
            word.created_at.format("%Y-%m-%d")
        );
    }
    println!("\n{} words total", store.len());
}

/// Add a single word
///
/// # Errors
/// Returns an error if the text is not a valid word or the store fails to
/// persist.
pub fn run_add(store: &mut WordStore, text: &str) -> Result<()> {
    let word = Word::new(text).with_context(|| format!("'{text}' is not a valid word"))?;

    if store.insert_ignore_duplicates(&word)? {
        println!("{} {}", "Added".green(), word);
    } else {
        println!("{} is already in the store", word);
    }
    Ok(())
}

/// Enable or disable a word for the secret draw
///
/// # Errors
/// Returns an error if the id is unknown or the store fails to persist.
pub fn run_set_enabled(store: &mut WordStore, word_id: u64, enabled: bool) -> Result<()> {
    store.set_enabled(word_id, enabled)?;
    let state = if enabled { "enabled" } else { "disabled" };
    println!("Word {word_id} {state}");
    Ok(())
}

/// Mark or unmark a word as sensitive content
///
/// # Errors
/// Returns an error if the id is unknown or the store fails to persist.
pub fn run_set_nsfw(store: &mut WordStore, word_id: u64, nsfw: bool) -> Result<()> {
    store.set_nsfw(word_id, nsfw)?;
    let state = if nsfw { "marked nsfw" } else { "unmarked" };
    println!("Word {word_id} {state}");
    Ok(())
}

/// Delete a word and its recorded results
///
/// # Errors
/// Returns an error if the id is unknown or the store fails to persist.
pub fn run_delete(store: &mut WordStore, word_id: u64) -> Result<()> {
    store.delete_word(word_id)?;
    println!("{} word {word_id}", "Deleted".red());
    Ok(())
}
