//! Integration tests for the breathing cycle engine.
//!
//! These drive the engine the way a host scheduler would: each
//! `PhaseStarted` event hands out a generation token and a duration, the
//! "scheduler" later hands the token back through `advance`.

use respira_core::breathing::{
    BreathingEngine, BreathingPhase, BreathingProfile, Condition, LungVisual, OxygenZone,
    RESTING_OXYGEN,
};
use respira_core::Event;

fn token(event: &Event) -> u64 {
    match event {
        Event::PhaseStarted { generation, .. } => *generation,
        other => panic!("expected PhaseStarted, got {other:?}"),
    }
}

/// A scripted stand-in for the host's delayed-callback scheduler. It
/// remembers every token ever issued, so stale ones can be replayed.
struct ScriptedScheduler {
    issued: Vec<u64>,
}

impl ScriptedScheduler {
    fn new() -> Self {
        Self { issued: Vec::new() }
    }

    fn arm(&mut self, generation: u64) {
        self.issued.push(generation);
    }

    fn fire_latest(&mut self, engine: &mut BreathingEngine) -> Option<Event> {
        let generation = *self.issued.last()?;
        let event = engine.advance(generation);
        if event.is_some() {
            self.arm(engine.generation());
        }
        event
    }
}

#[test]
fn scheduler_driven_cycle_oscillates_oxygen() {
    let mut engine = BreathingEngine::new(Condition::Resting.profile());
    let mut scheduler = ScriptedScheduler::new();

    scheduler.arm(token(&engine.start().unwrap()));
    assert_eq!(engine.oxygen_level(), RESTING_OXYGEN);

    let mut levels = vec![engine.oxygen_level()];
    for _ in 0..6 {
        scheduler.fire_latest(&mut engine).unwrap();
        levels.push(engine.oxygen_level());
    }
    // inhale +10 / exhale -5 from 50
    assert_eq!(levels, vec![50, 60, 55, 65, 60, 70, 65]);
}

#[test]
fn stop_then_stale_callback_changes_nothing() {
    let mut engine = BreathingEngine::new(Condition::Resting.profile());
    let mut scheduler = ScriptedScheduler::new();

    scheduler.arm(token(&engine.start().unwrap()));
    scheduler.fire_latest(&mut engine).unwrap();
    let frozen_level = engine.oxygen_level();

    engine.stop().unwrap();

    // Every previously armed callback fires late; none may mutate.
    for generation in scheduler.issued.clone() {
        assert!(engine.advance(generation).is_none());
    }
    assert_eq!(engine.phase(), BreathingPhase::Stopped);
    assert_eq!(engine.oxygen_level(), frozen_level);
}

#[test]
fn restart_after_stop_invalidates_older_tokens() {
    let mut engine = BreathingEngine::new(Condition::Resting.profile());

    let stale = token(&engine.start().unwrap());
    engine.stop().unwrap();
    let fresh = token(&engine.start().unwrap());
    assert_ne!(stale, fresh);

    // The pre-stop token is dead even though the engine is running again.
    assert!(engine.advance(stale).is_none());
    assert_eq!(engine.phase(), BreathingPhase::Inhaling);

    assert!(engine.advance(fresh).is_some());
    assert_eq!(engine.phase(), BreathingPhase::Exhaling);
}

#[test]
fn condition_switch_applies_at_phase_boundaries_only() {
    let mut engine = BreathingEngine::new(Condition::Sleep.profile());
    let mut scheduler = ScriptedScheduler::new();

    let started = engine.start().unwrap();
    if let Event::PhaseStarted { duration_ms, .. } = started {
        assert_eq!(duration_ms, 3_000);
    }
    scheduler.arm(token(&started));

    engine.set_condition(Condition::Exercise.profile()).unwrap();
    assert_eq!(engine.profile().name, "sleep");
    assert_eq!(engine.snapshot().phase_duration_ms, 3_000);

    // Boundary: completed inhale still used the sleep gain (+8).
    scheduler.fire_latest(&mut engine).unwrap();
    assert_eq!(engine.oxygen_level(), 58);
    assert_eq!(engine.profile().name, "exercise");
    assert_eq!(engine.snapshot().phase_duration_ms, 1_000);

    // Next boundary: exercise loss (-8).
    scheduler.fire_latest(&mut engine).unwrap();
    assert_eq!(engine.oxygen_level(), 50);
}

#[test]
fn snapshot_reflects_visuals_and_zone() {
    let mut engine = BreathingEngine::new(Condition::Exercise.profile());
    let mut scheduler = ScriptedScheduler::new();
    scheduler.arm(token(&engine.start().unwrap()));

    // Exercise gains (+15/-8 from 50) reach 86 on the fourth inhale.
    for _ in 0..7 {
        scheduler.fire_latest(&mut engine).unwrap();
    }
    let snap = engine.snapshot();
    assert_eq!(snap.oxygen_level, 86);
    assert_eq!(snap.zone, OxygenZone::High);
    assert_eq!(snap.profile, "exercise");
}

#[test]
fn hold_phase_runs_between_inhale_and_exhale() {
    let profile = BreathingProfile {
        name: "box".into(),
        inhale_ms: 2_000,
        hold_ms: 2_000,
        exhale_ms: 2_000,
        ..Condition::Resting.profile()
    };
    let mut engine = BreathingEngine::new(profile);
    let mut scheduler = ScriptedScheduler::new();
    scheduler.arm(token(&engine.start().unwrap()));

    let mut phases = vec![engine.phase()];
    for _ in 0..5 {
        scheduler.fire_latest(&mut engine).unwrap();
        phases.push(engine.phase());
    }
    assert_eq!(
        phases,
        vec![
            BreathingPhase::Inhaling,
            BreathingPhase::Holding,
            BreathingPhase::Exhaling,
            BreathingPhase::Inhaling,
            BreathingPhase::Holding,
            BreathingPhase::Exhaling,
        ]
    );
    assert_eq!(engine.snapshot().lungs, LungVisual::Resting);
}

#[test]
fn breathing_events_serialize_with_type_tags() {
    let mut engine = BreathingEngine::default();
    let started = serde_json::to_value(engine.start().unwrap()).unwrap();
    assert_eq!(started["type"], "PhaseStarted");
    assert_eq!(started["phase"], "inhaling");
    assert_eq!(started["lungs"], "expanded");

    let generation = engine.generation();
    let completed = serde_json::to_value(engine.advance(generation).unwrap()).unwrap();
    assert_eq!(completed["type"], "PhaseCompleted");
    assert_eq!(completed["oxygen_level"], 60);

    let stopped = serde_json::to_value(engine.stop().unwrap()).unwrap();
    assert_eq!(stopped["type"], "SimulationStopped");
    assert_eq!(stopped["oxygen_level"], 60);
}
