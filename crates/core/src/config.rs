use crate::GameError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROUNDS: u32 = 10;

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_rounds")]
    pub initial_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_rounds: DEFAULT_ROUNDS,
        }
    }
}

impl GameConfig {
    pub fn with_rounds(initial_rounds: u32) -> Self {
        Self { initial_rounds }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.initial_rounds == 0 {
            return Err(GameError::InvalidConfig(
                "initial_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
