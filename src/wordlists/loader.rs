//! Word list parsing
//!
//! Offline ingestion of candidate words from external lists. Two formats
//! are supported: a plain list whose last whitespace-separated token per
//! line is the word, and a nouns CSV where only rows tagged `Substantiv`
//! count. Both run through the same normalization: keep 5-letter words
//! over the game alphabet, in canonical uppercase.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize raw candidates into valid, deduplicated words
///
/// Invalid entries (wrong length, foreign characters) are dropped
/// silently; order of first occurrence is preserved.
#[must_use]
pub fn normalize_candidates<I, S>(candidates: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = rustc_hash::FxHashSet::default();
    candidates
        .into_iter()
        .filter_map(|raw| Word::new(raw.as_ref().trim()).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Load words from a plain word list
///
/// Each non-empty line contributes its last whitespace-separated token
/// (the lists this was written for prefix words with frequency columns).
/// Header lines and anything that does not normalize are skipped.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_plain_list<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let candidates = content
        .lines()
        .filter_map(|line| line.split_whitespace().next_back());

    Ok(normalize_candidates(candidates))
}

/// Load nouns from a CSV word list
///
/// Rows are `word,part-of-speech,...` with optional double-quoted fields;
/// only rows whose second field is `Substantiv` are taken.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_nouns_csv<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let candidates = content.lines().filter_map(|line| {
        let fields = split_csv_record(line);
        match (fields.first(), fields.get(1)) {
            (Some(word), Some(pos)) if pos == "Substantiv" => Some(word.clone()),
            _ => None,
        }
    });

    Ok(normalize_candidates(candidates))
}

/// Split one CSV record into fields, honoring double quotes
///
/// Handles the subset of CSV the noun lists use: comma separators,
/// optional `"`-quoted fields, `""` as an escaped quote inside them.
fn split_csv_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}
