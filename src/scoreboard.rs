//! Score records and leaderboard view
//!
//! The engine refreshes the current run's record once per update cycle.
//! Records are plain serializable values; where they get written, and in
//! what format, is the caller's concern.

use serde::{Deserialize, Serialize};

/// One run's result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unix timestamp (ms) when the run started.
    pub timestamp_ms: u64,
    pub score: f64,
    pub asteroids_destroyed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<ScoreRecord>,
    leaderboard_size: usize,
}

impl Scoreboard {
    pub fn new(leaderboard_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            leaderboard_size,
        }
    }

    /// Start a fresh run record; subsequent updates refresh it in place.
    pub fn open_run(&mut self, timestamp_ms: u64) {
        self.entries.push(ScoreRecord {
            timestamp_ms,
            score: 0.0,
            asteroids_destroyed: 0,
        });
    }

    /// Refresh the current run's totals, keeping its start timestamp.
    /// Opens a run if none exists.
    pub fn update_current(&mut self, timestamp_ms: u64, score: f64, asteroids_destroyed: u32) {
        match self.entries.last_mut() {
            Some(current) => {
                current.score = score;
                current.asteroids_destroyed = asteroids_destroyed;
            }
            None => self.entries.push(ScoreRecord {
                timestamp_ms,
                score,
                asteroids_destroyed,
            }),
        }
    }

    pub fn current(&self) -> Option<&ScoreRecord> {
        self.entries.last()
    }

    /// Every recorded run, in insertion order.
    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    /// Top runs by score, best first, capped at the configured size.
    pub fn leaderboard(&self) -> Vec<ScoreRecord> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(self.leaderboard_size);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_refreshes_current_run_in_place() {
        let mut board = Scoreboard::new(3);
        board.open_run(1_000);
        board.update_current(2_000, 10.0, 1);
        board.update_current(3_000, 30.0, 3);

        assert_eq!(board.entries().len(), 1);
        let current = board.current().unwrap();
        assert_eq!(current.timestamp_ms, 1_000);
        assert_eq!(current.score, 30.0);
        assert_eq!(current.asteroids_destroyed, 3);
    }

    #[test]
    fn test_update_without_open_run_creates_one() {
        let mut board = Scoreboard::new(3);
        board.update_current(500, 5.0, 1);
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.current().unwrap().timestamp_ms, 500);
    }

    #[test]
    fn test_leaderboard_ranks_top_n_by_score() {
        let mut board = Scoreboard::new(3);
        for (i, score) in [10.0, 50.0, 20.0, 40.0, 30.0].iter().enumerate() {
            board.open_run(i as u64);
            board.update_current(i as u64, *score, 0);
        }

        let top = board.leaderboard();
        let scores: Vec<f64> = top.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![50.0, 40.0, 30.0]);
    }

    #[test]
    fn test_records_round_trip_through_json() {
        let record = ScoreRecord {
            timestamp_ms: 1234,
            score: 42.5,
            asteroids_destroyed: 4,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
