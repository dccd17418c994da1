//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI: prompt, evaluate, print colored
//! tiles and the keyboard, repeat until the game ends.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::core::{MAX_ROUNDS, Phase};
use crate::output::{
    print_keyboard, print_loss, print_result_row, print_share_grid, print_win,
};
use crate::session::{DrawOptions, Session, SessionError};
use crate::store::WordStore;

/// Run the simple CLI game loop
///
/// Reads guesses from `reader` (stdin in production, a cursor in tests).
/// `quit` or end-of-input abandons the game without recording a result.
///
/// # Errors
/// Returns an error if no word can be drawn from the store, on I/O
/// failure, or if persisting the result fails.
pub fn run_play<R: BufRead>(
    store: &mut WordStore,
    options: DrawOptions,
    mut reader: R,
) -> Result<()> {
    let mut session = Session::start(store, options)?;

    println!("\n{}", "WORTLE".bright_green().bold());
    println!(
        "Guess the {}-letter German word in {MAX_ROUNDS} tries.",
        crate::core::WORD_LEN
    );
    println!("Type 'quit' to give up.\n");

    while let Phase::AwaitingGuess { round } = session.phase() {
        print!("Guess {round}/{MAX_ROUNDS}: ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            println!("\nGame abandoned.");
            return Ok(());
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Game abandoned. The word stays secret.");
            return Ok(());
        }

        match session.submit(store, input) {
            Ok(turn) => {
                if let Some(record) = session.history().last() {
                    print_result_row(record);
                }
                print_keyboard(&turn.keyboard);
            }
            Err(err @ SessionError::LengthMismatch { .. }) => {
                println!("{}", err.to_string().red());
            }
            Err(SessionError::NotAWord(word)) => {
                println!("{}", format!("'{word}' is not in the word list.").red());
            }
            Err(err) => return Err(err.into()),
        }
    }

    match session.phase() {
        Phase::Won { rounds_used } => print_win(rounds_used),
        Phase::Lost => print_loss(session.secret()),
        Phase::AwaitingGuess { .. } => unreachable!("loop exits only on terminal phase"),
    }
    print_share_grid(session.history(), session.phase());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Cursor;

    fn seeded_store(words: &[&str]) -> WordStore {
        let mut store = WordStore::in_memory();
        let words: Vec<Word> = words.iter().map(|w| Word::new(w).unwrap()).collect();
        store.insert_many(&words).unwrap();
        store
    }

    /// Store with exactly one eligible secret, so tests know the answer
    fn single_secret_store(secret: &str, fillers: &[&str]) -> WordStore {
        let mut store = seeded_store(&[secret]);
        let fillers: Vec<Word> = fillers.iter().map(|w| Word::new(w).unwrap()).collect();
        store.insert_many(&fillers).unwrap();
        for word in store.words().to_vec() {
            if word.text != secret {
                store.set_enabled(word.id, false).unwrap();
            }
        }
        store
    }

    #[test]
    fn play_fails_without_words() {
        let mut store = WordStore::in_memory();
        let reader = Cursor::new("");
        assert!(run_play(&mut store, DrawOptions::default(), reader).is_err());
    }

    #[test]
    fn play_win_records_result() {
        let mut store = single_secret_store("KATZE", &["HUNDE"]);
        let input = "HUNDE\nKATZE\n";

        run_play(&mut store, DrawOptions::default(), Cursor::new(input)).unwrap();

        assert_eq!(store.results().len(), 1);
        assert_eq!(store.results()[0].rounds_used, Some(2));
    }

    #[test]
    fn play_loss_after_six_wrong_guesses() {
        let mut store = single_secret_store("KATZE", &["HUNDE"]);
        let input = "HUNDE\n".repeat(6);

        run_play(&mut store, DrawOptions::default(), Cursor::new(input)).unwrap();

        assert_eq!(store.results().len(), 1);
        assert_eq!(store.results()[0].rounds_used, None);
    }

    #[test]
    fn rejected_guesses_cost_no_round() {
        let mut store = single_secret_store("KATZE", &["HUNDE"]);
        // Too short, unknown word, then the win: still round 1 when it lands
        let input = "ENTE\nXXXXX\nKATZE\n";

        run_play(&mut store, DrawOptions::default(), Cursor::new(input)).unwrap();

        assert_eq!(store.results()[0].rounds_used, Some(1));
    }

    #[test]
    fn quit_abandons_without_recording() {
        let mut store = single_secret_store("KATZE", &["HUNDE"]);
        let input = "HUNDE\nquit\n";

        run_play(&mut store, DrawOptions::default(), Cursor::new(input)).unwrap();

        assert!(store.results().is_empty());
    }

    #[test]
    fn end_of_input_abandons_gracefully() {
        let mut store = single_secret_store("KATZE", &["HUNDE"]);
        let input = "HUNDE\n";

        run_play(&mut store, DrawOptions::default(), Cursor::new(input)).unwrap();

        assert!(store.results().is_empty());
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut store = single_secret_store("KATZE", &[]);
        let input = "katze\n";

        run_play(&mut store, DrawOptions::default(), Cursor::new(input)).unwrap();

        assert_eq!(store.results()[0].rounds_used, Some(1));
    }
}
