//! Word list import
//!
//! Offline batch job that fills the store from a word list: the embedded
//! seed list, a plain text list, or a nouns CSV.

use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::store::WordStore;
use crate::wordlists::{SEED_WORDS, loader};

/// Where the candidate words come from
#[derive(Debug, Clone)]
pub enum ImportSource {
    /// The seed list compiled into the binary
    Embedded,
    /// Plain word list file
    PlainList(PathBuf),
    /// CSV with part-of-speech tags, nouns only
    NounsCsv(PathBuf),
}

/// Outcome of one import run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Valid candidates after normalization
    pub parsed: usize,
    /// Words actually added to the store
    pub added: usize,
    /// Valid candidates already present in the store
    pub duplicates: usize,
}

/// Parse the source and bulk-insert its words into the store
///
/// # Errors
/// Returns an error if the source file cannot be read or the store fails
/// to persist.
pub fn run_import(store: &mut WordStore, source: &ImportSource) -> Result<ImportReport> {
    let words = match source {
        ImportSource::Embedded => loader::normalize_candidates(SEED_WORDS.iter().copied()),
        ImportSource::PlainList(path) => loader::load_plain_list(path)?,
        ImportSource::NounsCsv(path) => loader::load_nouns_csv(path)?,
    };

    let parsed = words.len();
    let added = store.insert_many(&words)?;

    info!("Import from {source:?}: {parsed} parsed, {added} added");
    Ok(ImportReport {
        parsed,
        added,
        duplicates: parsed - added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_import_fills_empty_store() {
        let mut store = WordStore::in_memory();
        let report = run_import(&mut store, &ImportSource::Embedded).unwrap();

        assert_eq!(report.parsed, SEED_WORDS.len());
        assert_eq!(report.added, SEED_WORDS.len());
        assert_eq!(report.duplicates, 0);
        assert_eq!(store.len(), SEED_WORDS.len());
    }

    #[test]
    fn repeated_import_reports_duplicates() {
        let mut store = WordStore::in_memory();
        run_import(&mut store, &ImportSource::Embedded).unwrap();
        let second = run_import(&mut store, &ImportSource::Embedded).unwrap();

        assert_eq!(second.added, 0);
        assert_eq!(second.duplicates, SEED_WORDS.len());
        assert_eq!(store.len(), SEED_WORDS.len());
    }

    #[test]
    fn missing_source_file_is_an_error() {
        let mut store = WordStore::in_memory();
        let source = ImportSource::PlainList(PathBuf::from("/nonexistent/words.txt"));
        assert!(run_import(&mut store, &source).is_err());
    }
}
