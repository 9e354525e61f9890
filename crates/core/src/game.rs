use crate::{
    judge, Event, EventBus, GameConfig, Hand, HandSource, RngState, RoundResult, Session,
    SessionPhase, SessionSummary,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no hand selected")]
    InputMissing,
    #[error("session is over")]
    SessionOver,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result of a single round, consumed immediately by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub user_hand: Hand,
    pub system_hand: Hand,
    pub result: RoundResult,
    pub rounds_remaining: u32,
}

#[derive(Debug, Clone)]
pub struct GameEngine<S = RngState> {
    config: GameConfig,
    source: S,
    session: Session,
}

impl GameEngine<RngState> {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_source(config, RngState::from_seed(seed))
    }
}

impl<S: HandSource> GameEngine<S> {
    pub fn with_source(config: GameConfig, source: S) -> Result<Self, GameError> {
        config.validate()?;
        let session = Session::new(config.initial_rounds);
        Ok(Self {
            config,
            source,
            session,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn is_session_over(&self) -> bool {
        self.session.rounds_remaining == 0
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.session.rounds_remaining
    }

    /// Plays one round against a freshly drawn system hand.
    ///
    /// A missing hand leaves the session untouched so the caller can prompt
    /// again. Submitting after the last round is rejected the same way.
    pub fn submit_choice(
        &mut self,
        user_hand: Option<Hand>,
        events: &mut EventBus,
    ) -> Result<RoundOutcome, GameError> {
        let user_hand = user_hand.ok_or(GameError::InputMissing)?;
        if self.is_session_over() {
            return Err(GameError::SessionOver);
        }
        let system_hand = self.source.draw_hand();
        let result = judge(user_hand, system_hand);
        self.session.record(result);
        let outcome = RoundOutcome {
            user_hand,
            system_hand,
            result,
            rounds_remaining: self.session.rounds_remaining,
        };
        log::debug!(
            "round {}: {:?} vs {:?} -> {:?}",
            self.session.completed_rounds(),
            user_hand,
            system_hand,
            result
        );
        events.push(Event::RoundPlayed {
            round: self.session.completed_rounds(),
            user_hand,
            system_hand,
            result,
            rounds_remaining: outcome.rounds_remaining,
        });
        if self.is_session_over() {
            let summary = self.session.standings();
            log::info!(
                "session finished: {} wins, {} losses, {} draws",
                summary.wins,
                summary.losses,
                summary.draws
            );
            events.push(Event::SessionFinished { summary });
        }
        Ok(outcome)
    }

    /// Final tallies, available once every round has been played.
    pub fn summary(&self) -> Option<SessionSummary> {
        if self.is_session_over() {
            Some(self.session.standings())
        } else {
            None
        }
    }

    /// Running tallies for the session in progress.
    pub fn standings(&self) -> SessionSummary {
        self.session.standings()
    }

    pub fn reset(&mut self, events: &mut EventBus) {
        self.session = Session::new(self.config.initial_rounds);
        log::info!("session reset to {} rounds", self.config.initial_rounds);
        events.push(Event::SessionReset {
            rounds: self.config.initial_rounds,
        });
    }
}
