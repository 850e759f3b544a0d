//! Breathing condition profiles.
//!
//! A profile bundles phase durations with the oxygen deltas they produce.
//! Built-in conditions model the original simulation presets; custom
//! profiles are normalized so a full cycle stays within 2-8 seconds.

use serde::{Deserialize, Serialize};

use crate::error::BreathingError;

/// Oxygen level the gauge rests at before any breathing happens.
pub const RESTING_OXYGEN: u8 = 50;

/// Shortest allowed full cycle (inhale + hold + exhale) in milliseconds.
pub const MIN_CYCLE_MS: u64 = 2_000;
/// Longest allowed full cycle in milliseconds.
pub const MAX_CYCLE_MS: u64 = 8_000;

/// Named built-in breathing conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Resting,
    Exercise,
    Sleep,
    ElevatedRate,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Resting,
        Condition::Exercise,
        Condition::Sleep,
        Condition::ElevatedRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Resting => "resting",
            Condition::Exercise => "exercise",
            Condition::Sleep => "sleep",
            Condition::ElevatedRate => "elevated-rate",
        }
    }

    pub fn profile(&self) -> BreathingProfile {
        match self {
            Condition::Resting => BreathingProfile {
                name: "resting".into(),
                inhale_ms: 2_000,
                hold_ms: 0,
                exhale_ms: 2_000,
                oxygen_gain: 10,
                oxygen_loss: 5,
                min_oxygen: 40,
                max_oxygen: 100,
            },
            Condition::Exercise => BreathingProfile {
                name: "exercise".into(),
                inhale_ms: 1_000,
                hold_ms: 0,
                exhale_ms: 1_000,
                oxygen_gain: 15,
                oxygen_loss: 8,
                min_oxygen: 40,
                max_oxygen: 100,
            },
            Condition::Sleep => BreathingProfile {
                name: "sleep".into(),
                inhale_ms: 3_000,
                hold_ms: 0,
                exhale_ms: 3_000,
                oxygen_gain: 8,
                oxygen_loss: 3,
                min_oxygen: 40,
                max_oxygen: 100,
            },
            // An elevated rate asks for a 1.5s cycle; the rate clamp
            // floors it at 2s.
            Condition::ElevatedRate => BreathingProfile {
                name: "elevated-rate".into(),
                inhale_ms: 1_000,
                hold_ms: 0,
                exhale_ms: 1_000,
                oxygen_gain: 12,
                oxygen_loss: 10,
                min_oxygen: 40,
                max_oxygen: 100,
            },
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = BreathingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "resting" | "normal" => Ok(Condition::Resting),
            "exercise" => Ok(Condition::Exercise),
            "sleep" => Ok(Condition::Sleep),
            "elevated-rate" | "elevated" => Ok(Condition::ElevatedRate),
            other => Err(BreathingError::UnknownCondition(other.to_string())),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing and oxygen-delta configuration for the breathing cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingProfile {
    pub name: String,
    pub inhale_ms: u64,
    /// Zero skips the holding phase entirely.
    pub hold_ms: u64,
    pub exhale_ms: u64,
    /// Oxygen added per completed inhale, clamped to `max_oxygen`.
    pub oxygen_gain: u8,
    /// Oxygen removed per completed exhale, clamped to `min_oxygen`.
    pub oxygen_loss: u8,
    pub min_oxygen: u8,
    pub max_oxygen: u8,
}

impl BreathingProfile {
    pub fn cycle_ms(&self) -> u64 {
        self.inhale_ms + self.hold_ms + self.exhale_ms
    }

    /// Check structural invariants: non-zero inhale/exhale, sane bounds.
    pub fn validate(&self) -> Result<(), BreathingError> {
        if self.inhale_ms == 0 {
            return Err(BreathingError::InvalidProfile {
                field: "inhale_ms".into(),
                message: "inhale duration must be non-zero".into(),
            });
        }
        if self.exhale_ms == 0 {
            return Err(BreathingError::InvalidProfile {
                field: "exhale_ms".into(),
                message: "exhale duration must be non-zero".into(),
            });
        }
        if self.min_oxygen >= self.max_oxygen {
            return Err(BreathingError::InvalidProfile {
                field: "min_oxygen".into(),
                message: format!(
                    "min {} must be below max {}",
                    self.min_oxygen, self.max_oxygen
                ),
            });
        }
        if self.max_oxygen > 100 {
            return Err(BreathingError::InvalidProfile {
                field: "max_oxygen".into(),
                message: "oxygen level is a percentage, max cannot exceed 100".into(),
            });
        }
        Ok(())
    }

    /// Scale phase durations so the full cycle lands within 2-8 seconds,
    /// preserving the phase proportions.
    pub fn normalized(mut self) -> Self {
        let cycle = self.cycle_ms();
        let target = cycle.clamp(MIN_CYCLE_MS, MAX_CYCLE_MS);
        if cycle > 0 && target != cycle {
            self.inhale_ms = self.inhale_ms * target / cycle;
            self.hold_ms = self.hold_ms * target / cycle;
            self.exhale_ms = self.exhale_ms * target / cycle;
        }
        self
    }
}

impl Default for BreathingProfile {
    fn default() -> Self {
        Condition::Resting.profile()
    }
}
