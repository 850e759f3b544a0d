use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::breathing::{BreathingPhase, DiaphragmVisual, LungVisual, OxygenZone};
use crate::quiz::{Difficulty, FeedbackTier};

/// Every state change in the system produces an Event.
/// The CLI (or any other front end) renders events; the core never prints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    QuizStarted {
        session_id: Uuid,
        question_count: usize,
        difficulty: Option<Difficulty>,
        at: DateTime<Utc>,
    },
    QuestionPresented {
        /// Zero-based position within the drawn sequence.
        index: usize,
        total: usize,
        prompt: String,
        options: Vec<String>,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        question_id: u32,
        selected_index: usize,
        correct_index: usize,
        is_correct: bool,
        points_awarded: u32,
        explanation: String,
        at: DateTime<Utc>,
    },
    QuizCompleted {
        session_id: Uuid,
        score: u32,
        percentage: u8,
        tier: FeedbackTier,
        passed: bool,
        at: DateTime<Utc>,
    },
    PhaseStarted {
        phase: BreathingPhase,
        /// Token the scheduler must hand back to `advance`.
        generation: u64,
        duration_ms: u64,
        lungs: LungVisual,
        diaphragm: DiaphragmVisual,
        at: DateTime<Utc>,
    },
    PhaseCompleted {
        phase: BreathingPhase,
        oxygen_level: u8,
        zone: OxygenZone,
        at: DateTime<Utc>,
    },
    ConditionChanged {
        profile: String,
        /// True when the change is staged for the next phase rather than
        /// applied immediately.
        deferred: bool,
        at: DateTime<Utc>,
    },
    SimulationStopped {
        oxygen_level: u8,
        at: DateTime<Utc>,
    },
    SimulationReset {
        oxygen_level: u8,
        at: DateTime<Utc>,
    },
}
