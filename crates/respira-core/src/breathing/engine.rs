//! Breathing cycle state machine.
//!
//! The engine owns no timers. The host scheduler arms a delayed callback
//! for each phase using the duration and generation token from the
//! `PhaseStarted` event, and hands the token back through `advance` when
//! the delay elapses.
//!
//! ## State transitions
//!
//! ```text
//! Stopped -> Inhaling -> [Holding] -> Exhaling -> Inhaling -> ...
//! ```
//!
//! `stop` cancels the in-flight phase: the state snaps to `Stopped` at
//! once, the generation is bumped, and the already-scheduled continuation
//! becomes stale. A stale `advance` mutates nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::{BreathingProfile, RESTING_OXYGEN};
use crate::error::BreathingError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingPhase {
    Stopped,
    Inhaling,
    Holding,
    Exhaling,
}

/// Lung rendering state for the display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LungVisual {
    Expanded,
    Resting,
}

/// Diaphragm rendering state for the display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiaphragmVisual {
    Contracted,
    Relaxed,
}

/// Gauge coloring band for the current oxygen level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OxygenZone {
    Low,
    Normal,
    High,
}

impl OxygenZone {
    pub fn from_level(level: u8) -> Self {
        if level < 60 {
            OxygenZone::Low
        } else if level > 85 {
            OxygenZone::High
        } else {
            OxygenZone::Normal
        }
    }
}

/// Full state view for the display collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingSnapshot {
    pub phase: BreathingPhase,
    pub generation: u64,
    pub oxygen_level: u8,
    pub zone: OxygenZone,
    pub lungs: LungVisual,
    pub diaphragm: DiaphragmVisual,
    pub profile: String,
    /// Total duration of the current phase, zero when stopped.
    pub phase_duration_ms: u64,
    /// Wall-clock remainder of the current phase, zero when stopped.
    pub remaining_ms: u64,
}

/// Caller-driven breathing cycle engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingEngine {
    phase: BreathingPhase,
    oxygen_level: u8,
    /// Bumped on every transition; stale tokens are rejected by `advance`.
    generation: u64,
    profile: BreathingProfile,
    /// Profile staged by `set_condition` while a phase is in flight.
    pending_profile: Option<BreathingProfile>,
    #[serde(default)]
    phase_started_at: Option<DateTime<Utc>>,
}

impl BreathingEngine {
    pub fn new(profile: BreathingProfile) -> Self {
        Self {
            phase: BreathingPhase::Stopped,
            oxygen_level: RESTING_OXYGEN,
            generation: 0,
            profile,
            pending_profile: None,
            phase_started_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> BreathingPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != BreathingPhase::Stopped
    }

    pub fn oxygen_level(&self) -> u8 {
        self.oxygen_level
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn profile(&self) -> &BreathingProfile {
        &self.profile
    }

    fn lungs(&self) -> LungVisual {
        match self.phase {
            BreathingPhase::Inhaling | BreathingPhase::Holding => LungVisual::Expanded,
            BreathingPhase::Exhaling | BreathingPhase::Stopped => LungVisual::Resting,
        }
    }

    fn diaphragm(&self) -> DiaphragmVisual {
        match self.phase {
            BreathingPhase::Inhaling | BreathingPhase::Holding => DiaphragmVisual::Contracted,
            BreathingPhase::Exhaling | BreathingPhase::Stopped => DiaphragmVisual::Relaxed,
        }
    }

    fn phase_duration_ms(&self, phase: BreathingPhase) -> u64 {
        match phase {
            BreathingPhase::Stopped => 0,
            BreathingPhase::Inhaling => self.profile.inhale_ms,
            BreathingPhase::Holding => self.profile.hold_ms,
            BreathingPhase::Exhaling => self.profile.exhale_ms,
        }
    }

    pub fn snapshot(&self) -> BreathingSnapshot {
        let total = self.phase_duration_ms(self.phase);
        let elapsed = self
            .phase_started_at
            .map(|started| (Utc::now() - started).num_milliseconds().max(0) as u64)
            .unwrap_or(0);
        BreathingSnapshot {
            phase: self.phase,
            generation: self.generation,
            oxygen_level: self.oxygen_level,
            zone: OxygenZone::from_level(self.oxygen_level),
            lungs: self.lungs(),
            diaphragm: self.diaphragm(),
            profile: self.profile.name.clone(),
            phase_duration_ms: total,
            remaining_ms: total.saturating_sub(elapsed),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// `Stopped -> Inhaling`. Returns None if already running, so a rapid
    /// double toggle cannot arm two callback chains.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        self.apply_pending_profile();
        Some(self.enter_phase(BreathingPhase::Inhaling))
    }

    /// Complete the current phase and move to the next one.
    ///
    /// `generation` is the token issued by the `PhaseStarted` event that
    /// scheduled this callback. A token from before a stop, reset, or an
    /// earlier phase mutates nothing.
    pub fn advance(&mut self, generation: u64) -> Option<Event> {
        if !self.is_running() || generation != self.generation {
            log::debug!(
                "stale phase callback ignored (token {generation}, current {})",
                self.generation
            );
            return None;
        }

        let completed = self.phase;
        match completed {
            BreathingPhase::Inhaling => {
                self.oxygen_level = self
                    .oxygen_level
                    .saturating_add(self.profile.oxygen_gain)
                    .min(self.profile.max_oxygen);
            }
            BreathingPhase::Exhaling => {
                self.oxygen_level = self
                    .oxygen_level
                    .saturating_sub(self.profile.oxygen_loss)
                    .max(self.profile.min_oxygen);
            }
            BreathingPhase::Holding => {}
            BreathingPhase::Stopped => unreachable!("guarded by is_running"),
        }

        // The completed phase ran under the old profile; a staged profile
        // only shapes the phases that follow.
        self.apply_pending_profile();

        let next = match completed {
            BreathingPhase::Inhaling if self.profile.hold_ms > 0 => BreathingPhase::Holding,
            BreathingPhase::Inhaling => BreathingPhase::Exhaling,
            BreathingPhase::Holding => BreathingPhase::Exhaling,
            BreathingPhase::Exhaling => BreathingPhase::Inhaling,
            BreathingPhase::Stopped => unreachable!("guarded by is_running"),
        };
        self.enter_phase(next);
        // The scheduler re-arms from snapshot(); the display gets the
        // oxygen change.
        Some(Event::PhaseCompleted {
            phase: completed,
            oxygen_level: self.oxygen_level,
            zone: OxygenZone::from_level(self.oxygen_level),
            at: Utc::now(),
        })
    }

    /// Cancel the in-flight phase and halt. The oxygen level freezes where
    /// it is; nothing resets.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.generation += 1;
        self.phase = BreathingPhase::Stopped;
        self.phase_started_at = None;
        log::debug!("simulation stopped at oxygen {}", self.oxygen_level);
        Some(Event::SimulationStopped {
            oxygen_level: self.oxygen_level,
            at: Utc::now(),
        })
    }

    /// Stop if running and return to the resting oxygen level.
    pub fn reset(&mut self) -> Option<Event> {
        self.stop();
        self.oxygen_level = RESTING_OXYGEN;
        self.pending_profile = None;
        Some(Event::SimulationReset {
            oxygen_level: self.oxygen_level,
            at: Utc::now(),
        })
    }

    /// Apply a timing/delta profile.
    ///
    /// While running the profile is staged and takes effect at the next
    /// phase boundary; it never alters the phase in progress. When stopped
    /// it applies immediately.
    pub fn set_condition(&mut self, profile: BreathingProfile) -> Result<Event, BreathingError> {
        profile.validate()?;
        let profile = profile.normalized();
        let name = profile.name.clone();
        let deferred = self.is_running();
        if deferred {
            self.pending_profile = Some(profile);
        } else {
            self.profile = profile;
        }
        Ok(Event::ConditionChanged {
            profile: name,
            deferred,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn apply_pending_profile(&mut self) {
        if let Some(profile) = self.pending_profile.take() {
            self.profile = profile;
        }
    }

    fn enter_phase(&mut self, phase: BreathingPhase) -> Event {
        self.generation += 1;
        self.phase = phase;
        self.phase_started_at = Some(Utc::now());
        Event::PhaseStarted {
            phase,
            generation: self.generation,
            duration_ms: self.phase_duration_ms(phase),
            lungs: self.lungs(),
            diaphragm: self.diaphragm(),
            at: Utc::now(),
        }
    }
}

impl Default for BreathingEngine {
    fn default() -> Self {
        Self::new(BreathingProfile::default())
    }
}
