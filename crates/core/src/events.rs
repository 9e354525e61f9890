use crate::{Hand, RoundResult, SessionSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundPlayed {
        round: u32,
        user_hand: Hand,
        system_hand: Hand,
        result: RoundResult,
        rounds_remaining: u32,
    },
    SessionFinished { summary: SessionSummary },
    SessionReset { rounds: u32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
