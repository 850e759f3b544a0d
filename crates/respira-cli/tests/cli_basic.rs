//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "respira-cli", "--"])
        .args(args)
        .env("RESPIRA_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_anatomy_list() {
    let (stdout, _, code) = run_cli(&["anatomy", "list"]);
    assert_eq!(code, 0, "anatomy list failed");
    assert!(stdout.contains("alveoli"));
    assert!(stdout.contains("diaphragm"));
}

#[test]
fn test_anatomy_show_known_part() {
    let (stdout, _, code) = run_cli(&["anatomy", "show", "larynx"]);
    assert_eq!(code, 0, "anatomy show failed");
    assert!(stdout.contains("Voice Box"));
}

#[test]
fn test_anatomy_show_miss_is_not_an_error() {
    let (stdout, _, code) = run_cli(&["anatomy", "show", "appendix"]);
    assert_eq!(code, 0, "a content miss must not fail the command");
    assert!(stdout.contains("No entry for 'appendix'"));
}

#[test]
fn test_anatomy_show_json() {
    let (stdout, _, code) = run_cli(&["anatomy", "show", "alveoli", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["title"], "Alveoli");
}

#[test]
fn test_anatomy_search() {
    let (stdout, _, code) = run_cli(&["anatomy", "search", "gas exchange"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("alveoli"));
}

#[test]
fn test_quiz_bank_json() {
    let (stdout, _, code) = run_cli(&["quiz", "bank"]);
    assert_eq!(code, 0, "quiz bank failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(10));
}

#[test]
fn test_quiz_bank_difficulty_filter() {
    let (stdout, _, code) = run_cli(&["quiz", "bank", "--difficulty", "hard"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    for question in parsed.as_array().expect("array") {
        assert_eq!(question["difficulty"], "hard");
    }
}

#[test]
fn test_breathe_profiles() {
    let (stdout, _, code) = run_cli(&["breathe", "profiles"]);
    assert_eq!(code, 0, "breathe profiles failed");
    for name in ["resting", "exercise", "sleep", "elevated-rate"] {
        assert!(stdout.contains(name), "missing profile {name}");
    }
}

#[test]
fn test_breathe_run_one_cycle_json() {
    let (stdout, _, code) = run_cli(&[
        "breathe",
        "run",
        "--condition",
        "exercise",
        "--cycles",
        "1",
        "--json",
    ]);
    assert_eq!(code, 0, "breathe run failed");
    let last = stdout.lines().last().expect("snapshot output");
    let parsed: serde_json::Value = serde_json::from_str(last).expect("valid JSON");
    assert_eq!(parsed["phase"], "stopped");
    // One exercise cycle: +15 then -8 from the resting 50.
    assert_eq!(parsed["oxygen_level"], 57);
}

#[test]
fn test_breathe_unknown_condition_fails() {
    let (_, stderr, code) = run_cli(&["breathe", "run", "--condition", "panic"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown breathing condition"));
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(parsed["quiz"]["question_count"].is_number());
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "breathing.condition"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "resting");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "quiz.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}
