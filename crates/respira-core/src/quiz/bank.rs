//! Question types and the built-in respiratory question bank.
//!
//! The bank is the read-only content collaborator: quiz sessions draw
//! independent copies of its questions and never write back.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (easy|medium|hard)")),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anatomy,
    Physiology,
    Function,
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anatomy" => Ok(Category::Anatomy),
            "physiology" => Ok(Category::Physiology),
            "function" => Ok(Category::Function),
            other => Err(format!(
                "unknown category '{other}' (anatomy|physiology|function)"
            )),
        }
    }
}

/// A single multiple-choice question.
///
/// The correct-option index is validated at construction and stays valid
/// through option shuffling: shuffling remaps it by locating the original
/// correct option's text in the shuffled list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: u32,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
    difficulty: Difficulty,
    category: Category,
}

impl Question {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        explanation: impl Into<String>,
        difficulty: Difficulty,
        category: Category,
    ) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::InvalidQuestion {
                id,
                message: format!("needs at least 2 options, got {}", options.len()),
            });
        }
        if correct_index >= options.len() {
            return Err(QuizError::InvalidQuestion {
                id,
                message: format!(
                    "correct index {correct_index} out of range for {} options",
                    options.len()
                ),
            });
        }
        Ok(Self {
            id,
            prompt: prompt.into(),
            options,
            correct_index,
            explanation: explanation.into(),
            difficulty,
            category,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Shuffle this question's options in place, keeping the correct-option
    /// index pointed at the text that was originally marked correct.
    pub fn shuffle_options(&mut self, rng: &mut impl Rng) {
        let correct_text = self.options[self.correct_index].clone();
        self.options.shuffle(rng);
        // Unique option texts within a question; the first match is the one.
        self.correct_index = self
            .options
            .iter()
            .position(|o| *o == correct_text)
            .unwrap_or(self.correct_index);
    }
}

/// The read-only question bank.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Bank with the built-in respiratory-system questions.
    pub fn respiratory() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    /// Bank over caller-provided questions.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Lookup by id. Absence is a miss, not an error.
    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.difficulty == difficulty)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.category == category)
    }

    /// Draw up to `count` questions, uniformly shuffled without replacement.
    ///
    /// Shortage is not an error: if fewer than `count` qualify the draw
    /// returns as many as exist. Zero eligible questions is the distinct
    /// empty-bank condition.
    pub fn draw(
        &self,
        count: usize,
        difficulty: Option<Difficulty>,
        rng: &mut impl Rng,
    ) -> Result<Vec<Question>, QuizError> {
        let mut pool: Vec<Question> = match difficulty {
            Some(d) => self.by_difficulty(d).cloned().collect(),
            None => self.questions.clone(),
        };
        if pool.is_empty() {
            return Err(QuizError::NoQuestionsAvailable {
                difficulty: difficulty.map(|d| d.as_str().to_string()),
            });
        }
        pool.shuffle(rng);
        pool.truncate(count);
        Ok(pool)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::respiratory()
    }
}

// Module-private literal constructor; external questions go through
// `Question::new` and its validation.
fn q(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
    difficulty: Difficulty,
    category: Category,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
        difficulty,
        category,
    }
}

fn builtin_questions() -> Vec<Question> {
    use Category::*;
    use Difficulty::*;

    vec![
        q(
            1,
            "What is the primary function of the respiratory system?",
            [
                "To pump blood throughout the body",
                "To break down food for energy",
                "To exchange gases between the body and environment",
                "To provide structure and support",
            ],
            2,
            "The respiratory system's main job is to bring oxygen into the body \
             and remove carbon dioxide through gas exchange.",
            Easy,
            Function,
        ),
        q(
            2,
            "Which structure is known as the voice box?",
            ["Pharynx", "Trachea", "Larynx", "Bronchus"],
            2,
            "The larynx contains the vocal cords and is responsible for sound \
             production, earning it the nickname 'voice box'.",
            Easy,
            Anatomy,
        ),
        q(
            3,
            "Where does gas exchange actually occur in the lungs?",
            ["Bronchi", "Bronchioles", "Alveoli", "Trachea"],
            2,
            "Alveoli are tiny air sacs surrounded by capillaries where oxygen and \
             carbon dioxide are exchanged between air and blood.",
            Medium,
            Physiology,
        ),
        q(
            4,
            "What happens to the diaphragm during inhalation?",
            [
                "It relaxes and moves up",
                "It contracts and moves down",
                "It doesn't move during breathing",
                "It expands sideways",
            ],
            1,
            "During inhalation, the diaphragm contracts and flattens, moving \
             downward to increase chest cavity volume.",
            Medium,
            Physiology,
        ),
        q(
            5,
            "Which of these is NOT part of the respiratory system?",
            ["Nasal cavity", "Esophagus", "Trachea", "Bronchioles"],
            1,
            "The esophagus is part of the digestive system, carrying food from \
             the throat to the stomach.",
            Easy,
            Anatomy,
        ),
        q(
            6,
            "How many lobes does the right lung have?",
            ["1", "2", "3", "4"],
            2,
            "The right lung has three lobes (upper, middle, lower), while the \
             left lung has only two to make room for the heart.",
            Medium,
            Anatomy,
        ),
        q(
            7,
            "What is the approximate number of alveoli in adult lungs?",
            ["480 thousand", "48 million", "480 million", "4.8 billion"],
            2,
            "There are approximately 480 million alveoli in adult lungs, \
             providing an enormous surface area for gas exchange.",
            Hard,
            Anatomy,
        ),
        q(
            8,
            "Which gas is primarily removed from the blood in the lungs?",
            ["Oxygen", "Carbon dioxide", "Nitrogen", "Carbon monoxide"],
            1,
            "Carbon dioxide, a waste product of cellular metabolism, is removed \
             from the blood and exhaled through the lungs.",
            Easy,
            Physiology,
        ),
        q(
            9,
            "What prevents food from entering the respiratory tract during swallowing?",
            ["Uvula", "Epiglottis", "Soft palate", "Vocal cords"],
            1,
            "The epiglottis is a flap of tissue that covers the larynx opening \
             during swallowing to prevent aspiration.",
            Medium,
            Anatomy,
        ),
        q(
            10,
            "What is the normal breathing rate for adults at rest?",
            [
                "8-10 breaths per minute",
                "12-20 breaths per minute",
                "25-30 breaths per minute",
                "35-40 breaths per minute",
            ],
            1,
            "The normal respiratory rate for adults at rest is 12-20 breaths per \
             minute.",
            Medium,
            Physiology,
        ),
    ]
}
