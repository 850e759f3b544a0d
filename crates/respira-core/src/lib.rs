//! # Respira Core Library
//!
//! Core logic for Respira, a respiratory-system learning tool. The library
//! follows a CLI-first philosophy: everything here is headless, and the
//! `respira-cli` binary is a thin rendering layer over the same types any
//! other front end would use.
//!
//! ## Architecture
//!
//! - **Quiz engine**: draws a question sequence from the bank, advances
//!   through it with a single mutating operation, and produces an
//!   idempotent final report
//! - **Breathing engine**: a caller-driven phase state machine; the host
//!   scheduler re-invokes `advance` with the generation token each phase
//!   hands out, and stale tokens are ignored
//! - **Content**: read-only question bank and anatomy atlas
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`QuizSession`]: one bounded quiz attempt
//! - [`BreathingEngine`]: breathing cycle state machine
//! - [`QuestionBank`] / [`AnatomyAtlas`]: static content stores
//! - [`Config`]: application configuration
//! - [`Event`]: serializable state-change notifications for the display

pub mod breathing;
pub mod content;
pub mod error;
pub mod events;
pub mod quiz;
pub mod storage;

pub use breathing::{
    BreathingEngine, BreathingPhase, BreathingProfile, BreathingSnapshot, Condition, OxygenZone,
};
pub use content::{AnatomyAtlas, AnatomyInfo};
pub use error::{BreathingError, ConfigError, CoreError, QuizError, Result};
pub use events::Event;
pub use quiz::{
    Answer, Difficulty, FeedbackTier, Question, QuestionBank, QuizOptions, QuizReport, QuizSession,
    ScoringConfig,
};
pub use storage::Config;
