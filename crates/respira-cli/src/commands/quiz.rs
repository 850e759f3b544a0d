use std::io::{self, Write};

use clap::Subcommand;
use respira_core::quiz::{Category, Difficulty, QuizOptions, QuizSession};
use respira_core::{Config, QuestionBank, QuizReport};

#[derive(Subcommand)]
pub enum QuizAction {
    /// Start an interactive quiz attempt
    Start {
        /// Number of questions to draw
        #[arg(long)]
        count: Option<usize>,
        /// Restrict to a difficulty (easy|medium|hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Present options in their original bank order
        #[arg(long)]
        keep_option_order: bool,
        /// Print the per-question answer review after the report
        #[arg(long)]
        review: bool,
    },
    /// Print the question bank as JSON
    Bank {
        /// Filter by difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Filter by category (anatomy|physiology|function)
        #[arg(long)]
        category: Option<Category>,
    },
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuizAction::Start {
            count,
            difficulty,
            keep_option_order,
            review,
        } => start_attempt(count, difficulty, keep_option_order, review),
        QuizAction::Bank {
            difficulty,
            category,
        } => print_bank(difficulty, category),
    }
}

fn start_attempt(
    count: Option<usize>,
    difficulty: Option<Difficulty>,
    keep_option_order: bool,
    review: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let options = QuizOptions {
        question_count: count.unwrap_or(config.quiz.question_count),
        difficulty: difficulty.or(config.quiz.difficulty),
        randomize_options: !keep_option_order && config.quiz.randomize_options,
    };

    let bank = QuestionBank::respiratory();
    let mut rng = rand::thread_rng();
    let mut session = QuizSession::begin(&bank, &options, &mut rng)?;
    let scoring = config.scoring;

    println!("Respiratory system quiz -- {} questions\n", session.total_questions());

    while let Some(question) = session.current_question() {
        let prompt = question.prompt().to_string();
        let option_texts = question.options().to_vec();
        let correct_index = question.correct_index();
        let explanation = question.explanation().to_string();

        println!(
            "Question {} of {}",
            session.current_index() + 1,
            session.total_questions()
        );
        println!("{prompt}");
        for (i, option) in option_texts.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }

        let selected = read_choice(option_texts.len())?;
        let answer = session.submit_answer(selected, &scoring)?;

        if answer.is_correct {
            println!("Correct! (+{} points)", answer.points_awarded);
        } else {
            println!(
                "Incorrect. The correct answer is: {}",
                option_texts[correct_index]
            );
        }
        println!("Explanation: {explanation}");

        let progress = session.progress();
        if !progress.is_complete {
            println!(
                "Score so far: {} points ({} of {} answered)",
                progress.score, progress.answered, progress.total_questions
            );
        }
        println!();
    }

    let report = session.report(&scoring)?;
    print_report(&report);
    if review {
        print_review(&report);
    }
    Ok(())
}

/// Prompt until the user picks a valid 1-based option number.
fn read_choice(option_count: usize) -> Result<usize, Box<dyn std::error::Error>> {
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err("input closed before the quiz finished".into());
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => return Ok(n - 1),
            _ => println!("Enter a number between 1 and {option_count}."),
        }
    }
}

fn print_report(report: &QuizReport) {
    println!("Your Results");
    println!(
        "  Correct:  {}/{} ({}%)",
        report.correct_answers, report.total_questions, report.percentage
    );
    println!("  Score:    {} points", report.score);
    println!("  Time:     {}", report.formatted_elapsed());
    println!("  Feedback: {}", report.tier.message());
    println!(
        "  Status:   {}",
        if report.passed { "passed" } else { "failed" }
    );
}

fn print_review(report: &QuizReport) {
    println!("\nAnswer Review");
    for (i, row) in report.review.iter().enumerate() {
        let mark = if row.is_correct { "correct" } else { "incorrect" };
        println!("\nQuestion {} ({mark})", i + 1);
        println!("  {}", row.prompt);
        println!("  Your answer: {}", row.options[row.selected_index]);
        if !row.is_correct {
            println!("  Correct answer: {}", row.options[row.correct_index]);
        }
        println!("  {}", row.explanation);
    }
}

fn print_bank(
    difficulty: Option<Difficulty>,
    category: Option<Category>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bank = QuestionBank::respiratory();
    let questions: Vec<_> = bank
        .questions()
        .iter()
        .filter(|q| difficulty.map_or(true, |d| q.difficulty() == d))
        .filter(|q| category.map_or(true, |c| q.category() == c))
        .collect();
    println!("{}", serde_json::to_string_pretty(&questions)?);
    Ok(())
}
