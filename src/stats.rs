//! In-process game statistics
//!
//! Lives only as long as the process; nothing is written to disk.

use crate::game::{MAX_ATTEMPTS, Status};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    /// Record a finished game; in-progress games are ignored
    pub fn record(&mut self, status: Status, guesses: usize) {
        match status {
            Status::InProgress => return,
            Status::Won => {
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Status::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
    }

    /// Win percentage, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(Status::Won, 3);
        stats.record(Status::Won, 3);
        stats.record(Status::Lost, 6);
        stats.record(Status::Won, 6);
        stats.record(Status::InProgress, 2);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[6], 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
