//! Quiz session state machine.
//!
//! A session is one bounded attempt: it draws its questions up front,
//! advances through them with a single mutating operation, and becomes
//! terminal once the last answer is recorded.
//!
//! ## State transitions
//!
//! ```text
//! begin -> (submit_answer)* -> complete
//! ```
//!
//! A new attempt is a brand-new session; nothing resets in place.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bank::{Difficulty, Question, QuestionBank};
use super::scoring::{FeedbackTier, QuizReport, ReviewRow, ScoringConfig};
use crate::error::QuizError;
use crate::events::Event;

/// Options for drawing a session's question sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOptions {
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default = "default_true")]
    pub randomize_options: bool,
}

fn default_question_count() -> usize {
    5
}
fn default_true() -> bool {
    true
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            difficulty: None,
            randomize_options: true,
        }
    }
}

/// One recorded answer. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub points_awarded: u32,
}

/// One quiz attempt, begin to report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    answers: Vec<Answer>,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    is_complete: bool,
}

impl QuizSession {
    /// Draw questions from the bank and start the attempt.
    ///
    /// The drawn questions are independent copies; option shuffling never
    /// touches the bank. Zero eligible questions is an error and no
    /// session is created.
    pub fn begin(
        bank: &QuestionBank,
        options: &QuizOptions,
        rng: &mut impl Rng,
    ) -> Result<Self, QuizError> {
        let mut questions = bank.draw(options.question_count, options.difficulty, rng)?;
        // A zero-question session could never complete.
        if questions.is_empty() {
            return Err(QuizError::NoQuestionsAvailable {
                difficulty: options.difficulty.map(|d| d.as_str().to_string()),
            });
        }
        if options.randomize_options {
            for question in &mut questions {
                question.shuffle_options(rng);
            }
        }
        log::debug!(
            "quiz session started with {} questions (filter: {:?})",
            questions.len(),
            options.difficulty
        );
        Ok(Self {
            id: Uuid::new_v4(),
            questions,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            started_at: Utc::now(),
            ended_at: None,
            is_complete: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// The question currently presented, None once complete.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_complete {
            return None;
        }
        self.questions.get(self.current_index)
    }

    /// Mid-session progress view for the display.
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            current_index: self.current_index,
            total_questions: self.questions.len(),
            answered: self.answers.len(),
            score: self.score,
            is_complete: self.is_complete,
        }
    }

    pub fn started_event(&self, options: &QuizOptions) -> Event {
        Event::QuizStarted {
            session_id: self.id,
            question_count: self.questions.len(),
            difficulty: options.difficulty,
            at: Utc::now(),
        }
    }

    /// Display event for the current question, None once complete.
    pub fn presented_event(&self) -> Option<Event> {
        let question = self.current_question()?;
        Some(Event::QuestionPresented {
            index: self.current_index,
            total: self.questions.len(),
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            at: Utc::now(),
        })
    }

    pub fn answer_recorded_event(&self, answer: &Answer) -> Event {
        let explanation = self
            .questions
            .iter()
            .find(|q| q.id() == answer.question_id)
            .map(|q| q.explanation().to_string())
            .unwrap_or_default();
        Event::AnswerRecorded {
            question_id: answer.question_id,
            selected_index: answer.selected_index,
            correct_index: answer.correct_index,
            is_correct: answer.is_correct,
            points_awarded: answer.points_awarded,
            explanation,
            at: Utc::now(),
        }
    }

    /// Display event for the final result, None while in progress.
    pub fn completed_event(&self, scoring: &ScoringConfig) -> Option<Event> {
        let report = self.report(scoring).ok()?;
        Some(Event::QuizCompleted {
            session_id: self.id,
            score: report.score,
            percentage: report.percentage,
            tier: report.tier,
            passed: report.passed,
            at: Utc::now(),
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record the answer for the current question and advance.
    ///
    /// The sole mutating operation on a session. Rejected submissions
    /// (completed session, out-of-range index) change nothing.
    pub fn submit_answer(
        &mut self,
        selected_index: usize,
        scoring: &ScoringConfig,
    ) -> Result<Answer, QuizError> {
        if self.is_complete {
            log::warn!("answer submitted to completed session {}", self.id);
            return Err(QuizError::SessionComplete);
        }
        // current_index < questions.len() while not complete
        let question = &self.questions[self.current_index];
        if selected_index >= question.options().len() {
            return Err(QuizError::OptionOutOfRange {
                index: selected_index,
                len: question.options().len(),
            });
        }

        let is_correct = selected_index == question.correct_index();
        let answer = Answer {
            question_id: question.id(),
            selected_index,
            correct_index: question.correct_index(),
            is_correct,
            points_awarded: scoring.points_for(question.difficulty(), is_correct),
        };
        self.score += answer.points_awarded;
        self.answers.push(answer);
        self.current_index += 1;

        if self.current_index == self.questions.len() {
            self.is_complete = true;
            self.ended_at = Some(Utc::now());
            log::debug!("quiz session {} complete, score {}", self.id, self.score);
        }
        Ok(answer)
    }

    // ── Report ───────────────────────────────────────────────────────

    /// Final results. Valid only once complete; deterministic and
    /// idempotent for a given completed session.
    pub fn report(&self, scoring: &ScoringConfig) -> Result<QuizReport, QuizError> {
        if !self.is_complete {
            return Err(QuizError::SessionNotComplete {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }

        let total_questions = self.questions.len();
        let correct_answers = self.answers.iter().filter(|a| a.is_correct).count();
        let percentage =
            (correct_answers as f64 / total_questions as f64 * 100.0).round() as u8;
        let elapsed_secs = self
            .ended_at
            .map(|end| (end - self.started_at).num_seconds().max(0) as u64)
            .unwrap_or(0);

        let review = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| ReviewRow {
                question_id: question.id(),
                prompt: question.prompt().to_string(),
                options: question.options().to_vec(),
                selected_index: answer.selected_index,
                correct_index: answer.correct_index,
                is_correct: answer.is_correct,
                explanation: question.explanation().to_string(),
            })
            .collect();

        Ok(QuizReport {
            total_questions,
            correct_answers,
            incorrect_answers: total_questions - correct_answers,
            score: self.score,
            percentage,
            elapsed_secs,
            tier: FeedbackTier::from_percentage(percentage),
            passed: percentage >= scoring.passing_score,
            review,
        })
    }
}

/// Mid-session progress snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuizProgress {
    pub current_index: usize,
    pub total_questions: usize,
    pub answered: usize,
    pub score: u32,
    pub is_complete: bool,
}
