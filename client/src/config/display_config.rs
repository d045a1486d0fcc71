use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub show_coordinates: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_coordinates: true,
        }
    }
}
