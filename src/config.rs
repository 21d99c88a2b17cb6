// Configuration module for reading Snake.toml
//
// Every tunable the engine uses lives here, loaded once at process start
// and passed by reference into the decision engine. Nothing in the engine
// reads module-level constants.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub scores: ScoresConfig,
    pub debug: DebugConfig,
}

/// Appearance and transport settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Display color returned from the start endpoint. Fixed; never derived
    /// from game state.
    pub color: String,
}

/// Search shape constants
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Recursion limit beyond which exact search is abandoned for the
    /// local free-area estimate.
    pub max_depth: i32,
    /// Half-width of the square sampled at the depth cutoff (2 gives a
    /// 5x5 neighborhood clipped to board bounds).
    pub sample_half_width: i32,
}

/// Scoring constants applied by the move scorer
#[derive(Debug, Deserialize, Clone)]
pub struct ScoresConfig {
    /// Base score for leaving the board or hitting a body.
    pub collision_penalty: i32,
    /// Added per depth level to the collision penalty; dying later is
    /// better than dying now.
    pub collision_depth_rebate: i32,
    /// Applied when stepping onto a cell a larger-or-equal rival can
    /// reach next turn.
    pub danger_penalty: i32,
    /// Base bonus for valuable food; the current depth is subtracted so
    /// sooner food outscores later food.
    pub food_bonus: i32,
    /// Subtracted once per boundary axis the candidate cell touches.
    pub edge_penalty: i32,
    /// Health below which food counts as valuable even with no rivals.
    pub low_health_threshold: i32,
}

/// Decision log configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback.
    /// This should match the constants defined in Snake.toml.
    pub fn default_hardcoded() -> Self {
        Config {
            server: ServerConfig {
                color: "#DFFF00".to_string(),
            },
            search: SearchConfig {
                max_depth: 10,
                sample_half_width: 2,
            },
            scores: ScoresConfig {
                collision_penalty: -100,
                collision_depth_rebate: 2,
                danger_penalty: -20,
                food_bonus: 150,
                edge_penalty: 1,
                low_health_threshold: 50,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "chartreuse_decisions.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.search.max_depth, 10);
        assert_eq!(config.scores.collision_penalty, -100);
        assert_eq!(config.server.color, "#DFFF00");
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        // This test ensures Snake.toml is valid and can be parsed
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(file_config.server.color, hardcoded_config.server.color);

        assert_eq!(
            file_config.search.max_depth,
            hardcoded_config.search.max_depth
        );
        assert_eq!(
            file_config.search.sample_half_width,
            hardcoded_config.search.sample_half_width
        );

        assert_eq!(
            file_config.scores.collision_penalty,
            hardcoded_config.scores.collision_penalty
        );
        assert_eq!(
            file_config.scores.collision_depth_rebate,
            hardcoded_config.scores.collision_depth_rebate
        );
        assert_eq!(
            file_config.scores.danger_penalty,
            hardcoded_config.scores.danger_penalty
        );
        assert_eq!(
            file_config.scores.food_bonus,
            hardcoded_config.scores.food_bonus
        );
        assert_eq!(
            file_config.scores.edge_penalty,
            hardcoded_config.scores.edge_penalty
        );
        assert_eq!(
            file_config.scores.low_health_threshold,
            hardcoded_config.scores.low_health_threshold
        );

        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
    }

    #[test]
    fn test_load_or_default_works() {
        // This should succeed with the actual file
        let config = Config::load_or_default();
        assert_eq!(config.scores.low_health_threshold, 50);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        // Test with a non-existent file
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
