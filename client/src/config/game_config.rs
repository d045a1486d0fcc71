use common::config::Validate;
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub computer_move_delay_ms: u64,
    pub default_mode: Option<GameMode>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_move_delay_ms: 200,
            default_mode: None,
        }
    }
}
