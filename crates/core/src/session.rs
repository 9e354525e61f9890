use crate::RoundResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    InProgress,
    Terminal,
}

/// Counters for one game of fixed-length rounds.
///
/// `wins + losses + draws` always equals the number of completed rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub initial_rounds: u32,
    pub rounds_remaining: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Session {
    pub fn new(initial_rounds: u32) -> Self {
        Self {
            initial_rounds,
            rounds_remaining: initial_rounds,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn completed_rounds(&self) -> u32 {
        self.initial_rounds - self.rounds_remaining
    }

    pub fn phase(&self) -> SessionPhase {
        if self.rounds_remaining == 0 {
            SessionPhase::Terminal
        } else {
            SessionPhase::InProgress
        }
    }

    /// Tallies the result first, then consumes the round.
    pub(crate) fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Win => self.wins += 1,
            RoundResult::Lose => self.losses += 1,
            RoundResult::Draw => self.draws += 1,
        }
        self.rounds_remaining = self.rounds_remaining.saturating_sub(1);
    }

    pub fn standings(&self) -> SessionSummary {
        SessionSummary {
            wins: self.wins,
            losses: self.losses,
            draws: self.draws,
            rounds: self.initial_rounds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub rounds: u32,
}

impl SessionSummary {
    /// Wins over the configured round count.
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.rounds)
    }

    pub fn win_rate_percent(&self) -> f64 {
        self.win_rate() * 100.0
    }

    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}
