use std::thread;
use std::time::Duration;

use clap::Subcommand;
use respira_core::breathing::{
    BreathingEngine, BreathingPhase, BreathingProfile, BreathingSnapshot, Condition,
};
use respira_core::{Config, Event};

#[derive(Subcommand)]
pub enum BreatheAction {
    /// Run the breathing simulation in the terminal
    Run {
        /// Named condition (resting|exercise|sleep|elevated-rate)
        #[arg(long)]
        condition: Option<String>,
        /// Full breath cycles to run before stopping
        #[arg(long, default_value = "4")]
        cycles: u32,
        /// Emit snapshots as JSON lines instead of the gauge
        #[arg(long)]
        json: bool,
    },
    /// List the built-in condition profiles
    Profiles,
}

pub fn run(action: BreatheAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BreatheAction::Run {
            condition,
            cycles,
            json,
        } => {
            let profile = resolve_profile(condition.as_deref())?;
            run_simulation(profile, cycles, json)
        }
        BreatheAction::Profiles => {
            for condition in Condition::ALL {
                let p = condition.profile();
                println!(
                    "{:<14} inhale {}ms / hold {}ms / exhale {}ms, oxygen +{} / -{}",
                    p.name, p.inhale_ms, p.hold_ms, p.exhale_ms, p.oxygen_gain, p.oxygen_loss
                );
            }
            Ok(())
        }
    }
}

fn resolve_profile(condition: Option<&str>) -> Result<BreathingProfile, Box<dyn std::error::Error>> {
    match condition {
        Some(name) => {
            let condition: Condition = name.parse()?;
            Ok(condition.profile())
        }
        None => Ok(Config::load_or_default().breathing.profile()?),
    }
}

/// Plays the host-scheduler role: sleeps for each phase's duration, then
/// hands the generation token back to the engine.
fn run_simulation(
    profile: BreathingProfile,
    cycles: u32,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = BreathingEngine::new(profile);
    engine
        .start()
        .ok_or("simulation already running")?;

    let mut completed_cycles = 0;
    while completed_cycles < cycles {
        let snap = engine.snapshot();
        render(&snap, json)?;
        thread::sleep(Duration::from_millis(snap.phase_duration_ms));

        match engine.advance(snap.generation) {
            Some(Event::PhaseCompleted {
                phase: BreathingPhase::Exhaling,
                ..
            }) => completed_cycles += 1,
            Some(_) => {}
            None => break,
        }
    }

    if let Some(Event::SimulationStopped { oxygen_level, .. }) = engine.stop() {
        if json {
            println!("{}", serde_json::to_string(&engine.snapshot())?);
        } else {
            println!(
                "Stopped after {completed_cycles} cycles at {oxygen_level}% oxygen."
            );
        }
    }
    Ok(())
}

fn render(snap: &BreathingSnapshot, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(snap)?);
        return Ok(());
    }
    let filled = (snap.oxygen_level as usize * 20) / 100;
    let bar: String = (0..20).map(|i| if i < filled { '#' } else { '-' }).collect();
    println!(
        "{:<9} [{bar}] {:>3}% {:<6} lungs {}, diaphragm {}",
        format!("{:?}", snap.phase).to_lowercase(),
        snap.oxygen_level,
        format!("{:?}", snap.zone).to_lowercase(),
        format!("{:?}", snap.lungs).to_lowercase(),
        format!("{:?}", snap.diaphragm).to_lowercase()
    );
    Ok(())
}
