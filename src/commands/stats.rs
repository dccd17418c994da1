//! Result statistics
//!
//! Aggregates the store's game records into the numbers the stats screen
//! shows.

use crate::core::MAX_ROUNDS;
use crate::store::WordStore;

/// Aggregated game results
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Wins by round: index 0 holds round-1 wins, index 5 round-6 wins
    pub distribution: [usize; MAX_ROUNDS as usize],
    /// Mean rounds over winning games, `None` before the first win
    pub average_rounds: Option<f64>,
}

impl StatsSummary {
    /// Win rate in percent, 0 for an empty record
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Compute the summary from all recorded results
#[must_use]
pub fn compute_stats(store: &WordStore) -> StatsSummary {
    let mut wins = 0;
    let mut losses = 0;
    let mut distribution = [0; MAX_ROUNDS as usize];
    let mut rounds_total = 0u64;

    for record in store.results() {
        match record.rounds_used {
            Some(rounds) if (1..=MAX_ROUNDS).contains(&rounds) => {
                wins += 1;
                distribution[usize::from(rounds) - 1] += 1;
                rounds_total += u64::from(rounds);
            }
            // Out-of-range round counts come from a hand-edited store
            // file; count the win but leave the distribution alone
            Some(_) => wins += 1,
            None => losses += 1,
        }
    }

    let average_rounds = if wins > 0 {
        Some(rounds_total as f64 / wins as f64)
    } else {
        None
    };

    StatsSummary {
        total_games: store.results().len(),
        wins,
        losses,
        distribution,
        average_rounds,
    }
}
