//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Quiz defaults (question count, difficulty filter, option shuffling)
//! - Scoring (passing score, base points, difficulty bonuses)
//! - Breathing simulation condition and optional custom profile
//!
//! Configuration is stored at `~/.config/respira/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::breathing::{BreathingProfile, Condition};
use crate::error::{BreathingError, ConfigError};
use crate::quiz::{QuizOptions, ScoringConfig};

/// Breathing simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingConfig {
    /// Named built-in condition used when no custom profile is set.
    #[serde(default = "default_condition")]
    pub condition: String,
    /// Full profile override; wins over `condition` when present.
    #[serde(default)]
    pub custom_profile: Option<BreathingProfile>,
}

fn default_condition() -> String {
    "resting".into()
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            condition: default_condition(),
            custom_profile: None,
        }
    }
}

impl BreathingConfig {
    /// Resolve the configured profile, normalized and validated.
    pub fn profile(&self) -> Result<BreathingProfile, BreathingError> {
        if let Some(ref custom) = self.custom_profile {
            custom.validate()?;
            return Ok(custom.clone().normalized());
        }
        let condition: Condition = self.condition.parse()?;
        Ok(condition.profile())
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/respira/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizOptions,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub breathing: BreathingConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing out the default on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as a string by dot-separated key
    /// (e.g. `quiz.question_count`).
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let value = json.pointer(&json_pointer(key))?.clone();
        match value {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// The new value is parsed against the type of the existing value, so
    /// `quiz.question_count` takes a number and `quiz.randomize_options`
    /// takes a bool.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let slot = json
            .pointer_mut(&json_pointer(key))
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        *slot = parse_as_existing_type(slot, key, value)?;

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

fn json_pointer(dot_key: &str) -> String {
    format!("/{}", dot_key.replace('.', "/"))
}

fn parse_as_existing_type(
    existing: &serde_json::Value,
    key: &str,
    value: &str,
) -> Result<serde_json::Value, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };
    match existing {
        serde_json::Value::Bool(_) => value
            .parse::<bool>()
            .map(serde_json::Value::Bool)
            .map_err(|_| invalid(format!("cannot parse '{value}' as bool"))),
        serde_json::Value::Number(_) => {
            if let Ok(n) = value.parse::<u64>() {
                Ok(serde_json::Value::Number(n.into()))
            } else {
                value
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))
            }
        }
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            serde_json::from_str(value).map_err(|e| invalid(e.to_string()))
        }
        _ => Ok(serde_json::Value::String(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.quiz.question_count, 5);
        assert_eq!(parsed.scoring.passing_score, 70);
        assert_eq!(parsed.breathing.condition, "resting");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("quiz.question_count").as_deref(), Some("5"));
        assert_eq!(cfg.get("quiz.randomize_options").as_deref(), Some("true"));
        assert_eq!(cfg.get("breathing.condition").as_deref(), Some("resting"));
        assert!(cfg.get("quiz.missing_key").is_none());
    }

    #[test]
    fn breathing_config_resolves_named_condition() {
        let cfg = BreathingConfig {
            condition: "exercise".into(),
            custom_profile: None,
        };
        let profile = cfg.profile().unwrap();
        assert_eq!(profile.name, "exercise");
        assert_eq!(profile.inhale_ms, 1_000);
    }

    #[test]
    fn breathing_config_prefers_custom_profile() {
        let cfg = BreathingConfig {
            condition: "sleep".into(),
            custom_profile: Some(BreathingProfile {
                name: "custom".into(),
                inhale_ms: 500,
                hold_ms: 0,
                exhale_ms: 500,
                ..BreathingProfile::default()
            }),
        };
        let profile = cfg.profile().unwrap();
        assert_eq!(profile.name, "custom");
        // Normalization stretched the sub-minimum cycle.
        assert_eq!(profile.cycle_ms(), crate::breathing::MIN_CYCLE_MS);
    }

    #[test]
    fn breathing_config_rejects_unknown_condition() {
        let cfg = BreathingConfig {
            condition: "hyperventilating".into(),
            custom_profile: None,
        };
        assert!(matches!(
            cfg.profile(),
            Err(BreathingError::UnknownCondition(_))
        ));
    }

    #[test]
    fn parse_as_existing_type_respects_slot_types() {
        let bool_slot = serde_json::Value::Bool(true);
        assert_eq!(
            parse_as_existing_type(&bool_slot, "k", "false").unwrap(),
            serde_json::Value::Bool(false)
        );
        assert!(parse_as_existing_type(&bool_slot, "k", "maybe").is_err());

        let num_slot = serde_json::Value::Number(5.into());
        assert_eq!(
            parse_as_existing_type(&num_slot, "k", "8").unwrap(),
            serde_json::Value::Number(8.into())
        );
        assert!(parse_as_existing_type(&num_slot, "k", "not-a-number").is_err());
    }
}
