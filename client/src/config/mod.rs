mod config;
mod display_config;
mod game_config;
mod log_config;

pub use config::{Config, get_config_manager};
pub use display_config::DisplayConfig;
pub use game_config::GameConfig;
pub use log_config::LogConfig;
