//! Cumulative play statistics
//!
//! Carried across days; a stale saved game abandons the board but never
//! touches these counters.

use super::MAX_ATTEMPTS;

/// Lifetime counters plus the guess distribution
///
/// Invariants: `max_streak >= current_streak`; the streak resets on any loss
/// and grows by one on any win; distribution entries only grow on a win, at
/// the index of the winning row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub distribution: [u32; MAX_ATTEMPTS],
}

impl Stats {
    /// Record a win on the given board row (0-based)
    pub fn record_win(&mut self, row: usize) {
        self.wins += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        self.distribution[row] += 1;
    }

    /// Record a loss; the streak is gone
    pub fn record_loss(&mut self) {
        self.losses += 1;
        self.current_streak = 0;
    }

    /// Total games finished
    #[must_use]
    pub const fn total_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win percentage, or `None` before the first finished game
    #[must_use]
    pub fn win_percentage(&self) -> Option<u32> {
        let total = self.total_played();
        if total == 0 {
            None
        } else {
            Some((f64::from(self.wins) / f64::from(total) * 100.0) as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stats_are_zeroed() {
        let stats = Stats::default();
        assert_eq!(stats.total_played(), 0);
        assert_eq!(stats.win_percentage(), None);
    }

    #[test]
    fn win_loss_bookkeeping() {
        // Three wins on rows 0, 1, 2, then two losses.
        let mut stats = Stats::default();
        stats.record_win(0);
        stats.record_win(1);
        stats.record_win(2);
        stats.record_loss();
        stats.record_loss();

        assert_eq!(stats.wins, 3);
        assert_eq!(stats.losses, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.distribution[0], 1);
        assert_eq!(stats.distribution[1], 1);
        assert_eq!(stats.distribution[2], 1);
        assert_eq!(stats.distribution[3], 0);
        assert_eq!(stats.total_played(), 5);
    }

    #[test]
    fn max_streak_survives_a_loss() {
        let mut stats = Stats::default();
        stats.record_win(0);
        stats.record_win(0);
        stats.record_loss();
        stats.record_win(3);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn win_percentage_rounds_down() {
        let mut stats = Stats::default();
        stats.record_win(0);
        stats.record_loss();
        stats.record_loss();

        // 1/3 = 33.3%
        assert_eq!(stats.win_percentage(), Some(33));
    }
}
