mod engine;
mod profile;

pub use engine::{
    BreathingEngine, BreathingPhase, BreathingSnapshot, DiaphragmVisual, LungVisual, OxygenZone,
};
pub use profile::{BreathingProfile, Condition, MAX_CYCLE_MS, MIN_CYCLE_MS, RESTING_OXYGEN};
