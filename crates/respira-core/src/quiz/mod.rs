mod bank;
mod engine;
mod scoring;

pub use bank::{Category, Difficulty, Question, QuestionBank};
pub use engine::{Answer, QuizOptions, QuizProgress, QuizSession};
pub use scoring::{BonusPoints, FeedbackTier, QuizReport, ReviewRow, ScoringConfig};
