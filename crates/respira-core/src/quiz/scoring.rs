//! Scoring configuration, feedback tiers and the final report.

use serde::{Deserialize, Serialize};

use super::bank::Difficulty;

/// Points model for a quiz attempt.
///
/// Base points are awarded per correct answer; harder questions add a
/// flat bonus on top. Incorrect answers award nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_passing_score")]
    pub passing_score: u8,
    #[serde(default = "default_base_points")]
    pub base_points: u32,
    #[serde(default)]
    pub bonus_points: BonusPoints,
}

/// Difficulty-tiered bonus table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusPoints {
    #[serde(default)]
    pub easy: u32,
    #[serde(default = "default_medium_bonus")]
    pub medium: u32,
    #[serde(default = "default_hard_bonus")]
    pub hard: u32,
}

fn default_passing_score() -> u8 {
    70
}
fn default_base_points() -> u32 {
    10
}
fn default_medium_bonus() -> u32 {
    2
}
fn default_hard_bonus() -> u32 {
    5
}

impl Default for BonusPoints {
    fn default() -> Self {
        Self {
            easy: 0,
            medium: default_medium_bonus(),
            hard: default_hard_bonus(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            passing_score: default_passing_score(),
            base_points: default_base_points(),
            bonus_points: BonusPoints::default(),
        }
    }
}

impl ScoringConfig {
    pub fn bonus_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.bonus_points.easy,
            Difficulty::Medium => self.bonus_points.medium,
            Difficulty::Hard => self.bonus_points.hard,
        }
    }

    /// Points for one answered question.
    pub fn points_for(&self, difficulty: Difficulty, is_correct: bool) -> u32 {
        if is_correct {
            self.base_points + self.bonus_for(difficulty)
        } else {
            0
        }
    }
}

/// Qualitative band derived from the score percentage.
///
/// Bands are evaluated highest threshold first; the first satisfied band
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    NeedsWork,
    Poor,
}

impl FeedbackTier {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 90 {
            FeedbackTier::Excellent
        } else if percentage >= 70 {
            FeedbackTier::Good
        } else if percentage >= 50 {
            FeedbackTier::NeedsWork
        } else {
            FeedbackTier::Poor
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent! You really know your respiratory system!",
            FeedbackTier::Good => {
                "Good job! You have a solid understanding of the respiratory system."
            }
            FeedbackTier::NeedsWork => "You're getting there! Review the material and try again.",
            FeedbackTier::Poor => {
                "Consider reviewing the material more thoroughly before trying again."
            }
        }
    }
}

impl std::fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FeedbackTier::Excellent => "excellent",
            FeedbackTier::Good => "good",
            FeedbackTier::NeedsWork => "needs-work",
            FeedbackTier::Poor => "poor",
        };
        f.write_str(name)
    }
}

/// One row of the post-quiz answer review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRow {
    pub question_id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub explanation: String,
}

/// Final results of a completed quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub score: u32,
    /// Rounded, 0..=100.
    pub percentage: u8,
    pub elapsed_secs: u64,
    pub tier: FeedbackTier,
    pub passed: bool,
    pub review: Vec<ReviewRow>,
}

impl QuizReport {
    /// Elapsed time as M:SS.
    pub fn formatted_elapsed(&self) -> String {
        let minutes = self.elapsed_secs / 60;
        let seconds = self.elapsed_secs % 60;
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(FeedbackTier::from_percentage(100), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_percentage(90), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_percentage(89), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(70), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(69), FeedbackTier::NeedsWork);
        assert_eq!(FeedbackTier::from_percentage(50), FeedbackTier::NeedsWork);
        assert_eq!(FeedbackTier::from_percentage(49), FeedbackTier::Poor);
        assert_eq!(FeedbackTier::from_percentage(0), FeedbackTier::Poor);
    }

    #[test]
    fn points_include_difficulty_bonus_only_when_correct() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.points_for(Difficulty::Easy, true), 10);
        assert_eq!(scoring.points_for(Difficulty::Medium, true), 12);
        assert_eq!(scoring.points_for(Difficulty::Hard, true), 15);
        assert_eq!(scoring.points_for(Difficulty::Hard, false), 0);
    }

    #[test]
    fn elapsed_formats_as_minutes_and_padded_seconds() {
        let report = QuizReport {
            total_questions: 5,
            correct_answers: 5,
            incorrect_answers: 0,
            score: 50,
            percentage: 100,
            elapsed_secs: 65,
            tier: FeedbackTier::Excellent,
            passed: true,
            review: Vec::new(),
        };
        assert_eq!(report.formatted_elapsed(), "1:05");
    }
}
