use std::path::Path;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Who chooses the moves for one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    Human,
    Random,
}

/// Match setup: who plays each colour and how many games to run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub red: Controller,
    pub green: Controller,
    /// Seed for random agents. Green uses `seed + 1`.
    pub seed: Option<u64>,
    pub games: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            red: Controller::Human,
            green: Controller::Random,
            seed: None,
            games: 1,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// A `tracing` filter directive such as `"warn"` or `"connect_four_engine=debug"`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.games == 0 {
            return Err(ConfigError::Validation("game.games must be > 0".into()));
        }
        if self.game.games > 1
            && (self.game.red == Controller::Human || self.game.green == Controller::Human)
        {
            return Err(ConfigError::Validation(
                "game.games > 1 requires both players to be random".into(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid filter: {e}",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.red, Controller::Human);
        assert_eq!(config.game.green, Controller::Random);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
red = "random"
seed = 42
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.red, Controller::Random);
        assert_eq!(config.game.seed, Some(42));
        // Other fields should be defaults
        assert_eq!(config.game.green, Controller::Random);
        assert_eq!(config.game.games, 1);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.games, default.game.games);
        assert_eq!(config.logging.level, default.logging.level);
    }

    #[test]
    fn test_unknown_controller_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nred = \"minimax\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.game.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_many_games_with_human() {
        let mut config = AppConfig::default();
        config.game.games = 10;
        assert!(config.validate().is_err());

        config.game.red = Controller::Random;
        config.validate().expect("random vs random may play many games");
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "connect_four_engine=shouting".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.games, 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
red = "random"
green = "random"
games = 25

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.games, 25);
        assert_eq!(config.logging.level, "debug");
        // Others are defaults
        assert_eq!(config.game.seed, None);
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        std::fs::write(&path, "[game]\ngames = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
