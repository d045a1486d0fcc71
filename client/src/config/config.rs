use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{DisplayConfig, GameConfig, LogConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};
    use common::games::tictactoe::GameMode;

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = Config {
            game: GameConfig {
                computer_move_delay_ms: 0,
                default_mode: Some(GameMode::SinglePlayer),
            },
            log: LogConfig {
                enabled: true,
                prefix: Some("Client".to_string()),
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));

        manager.set_config(&config).unwrap();

        let loaded_config = manager.get_config().unwrap();
        assert_eq!(config, loaded_config);

        let reloaded = get_config_manager(Some(file_path.as_str())).get_config().unwrap();
        assert_eq!(config, reloaded);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        let loaded_config = manager.get_config().unwrap();
        assert_eq!(Config::default(), loaded_config);
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        let content = r#"
            game:
              computer_move_delay_ms: 50
              default_mode: Multiplayer
        "#;
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(content).unwrap();

        let loaded_config = get_config_manager(Some(file_path.as_str())).get_config().unwrap();

        assert_eq!(loaded_config.game.computer_move_delay_ms, 50);
        assert_eq!(loaded_config.game.default_mode, Some(GameMode::Multiplayer));
        assert_eq!(loaded_config.display, DisplayConfig::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_out_of_range_delay_cant_be_read() {
        let content = r#"
            game:
              computer_move_delay_ms: 60000
              default_mode: null
        "#;
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(content).unwrap();

        let result = get_config_manager(Some(file_path.as_str())).get_config();

        assert!(matches!(result, Err(ConfigError::Validation(_))));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_malformed_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("game: [not, a, mapping")
            .unwrap();

        let result = get_config_manager(Some(file_path.as_str())).get_config();

        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let config = Config {
            game: GameConfig {
                computer_move_delay_ms: 10_000,
                default_mode: None,
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));

        assert!(manager.set_config(&config).is_err());
        assert!(!std::path::Path::new(&file_path).exists());
    }
}
