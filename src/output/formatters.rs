//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{GuessRecord, GuessResult, KeyboardState, Phase, Verdict, Word};

/// Keyboard layout used for rendering: QWERTZ plus the extended letters
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTZUIOPÜ", "ASDFGHJKLÖÄ", "YXCVBNMß"];

/// Color one letter tile according to its verdict
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let cell = format!(" {letter} ");
    match verdict {
        Verdict::Correct => cell.black().on_green(),
        Verdict::Present => cell.black().on_yellow(),
        Verdict::Absent => cell.white().on_bright_black(),
    }
}

/// Render an evaluated guess as one row of colored tiles
#[must_use]
pub fn result_row(guess: &Word, result: &GuessResult) -> String {
    guess
        .letters()
        .iter()
        .zip(result.iter())
        .map(|(letter, verdict)| tile(*letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an evaluated guess as a shareable emoji row
#[must_use]
pub fn share_row(result: &GuessResult) -> String {
    result
        .iter()
        .map(|verdict| match verdict {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬛',
        })
        .collect()
}

/// Render the full shareable grid, including the score line
///
/// The score line follows the usual share format: the winning round out
/// of six, or `X/6` for a loss.
#[must_use]
pub fn share_grid(history: &[GuessRecord], phase: Phase) -> String {
    let score = match phase {
        Phase::Won { rounds_used } => format!("{rounds_used}/6"),
        Phase::Lost => "X/6".to_string(),
        Phase::AwaitingGuess { .. } => "?/6".to_string(),
    };

    let mut grid = format!("Wortle {score}\n");
    for record in history {
        grid.push_str(&share_row(&record.result));
        grid.push('\n');
    }
    grid
}

/// Render the keyboard with each guessed letter in its best-known color
///
/// Letters that were never guessed stay uncolored (neutral), which is
/// distinct from the gray of a letter known to be absent.
#[must_use]
pub fn keyboard_rows(state: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row
                .chars()
                .map(|letter| match state.verdict_for(letter) {
                    Some(verdict) => tile(letter, verdict).to_string(),
                    None => format!(" {letter} "),
                })
                .collect::<Vec<_>>()
                .join("");
            // Stagger the rows like a physical keyboard
            format!("{}{keys}", "  ".repeat(i))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn record(secret: &str, guess: &str) -> GuessRecord {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let result = evaluate(&secret, &guess);
        GuessRecord { guess, result }
    }

    #[test]
    fn share_row_maps_verdicts_to_emoji() {
        let rec = record("KATZE", "KATER");
        assert_eq!(share_row(&rec.result), "🟩🟩🟩🟨⬛");
    }

    #[test]
    fn share_row_win_is_all_green() {
        let rec = record("KATZE", "KATZE");
        assert_eq!(share_row(&rec.result), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_won_carries_round_count() {
        let history = vec![record("KATZE", "HUNDE"), record("KATZE", "KATZE")];
        let grid = share_grid(&history, Phase::Won { rounds_used: 2 });

        assert!(grid.starts_with("Wortle 2/6\n"));
        assert_eq!(grid.lines().count(), 3);
    }

    #[test]
    fn share_grid_lost_shows_x() {
        let history = vec![record("KATZE", "HUNDE")];
        let grid = share_grid(&history, Phase::Lost);
        assert!(grid.starts_with("Wortle X/6\n"));
    }

    #[test]
    fn keyboard_rows_cover_full_alphabet() {
        let letters: String = KEYBOARD_ROWS.concat();
        assert_eq!(letters.chars().count(), 30);
        for ch in ('A'..='Z').chain(['Ä', 'Ö', 'Ü', 'ß']) {
            assert!(letters.contains(ch), "keyboard is missing '{ch}'");
        }
    }

    #[test]
    fn keyboard_rows_render_every_key() {
        let state = KeyboardState::reduce(&[record("KATZE", "KATER")]);
        let rows = keyboard_rows(&state);

        assert_eq!(rows.len(), 3);
        for (layout, rendered) in KEYBOARD_ROWS.iter().zip(&rows) {
            for letter in layout.chars() {
                assert!(rendered.contains(letter));
            }
        }
    }
}
