//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with a throwaway config directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(config_dir: &Path, args: &[&str]) -> (i32, String, String) {
    run_cli_with_input(config_dir, args, "")
}

fn run_cli_with_input(config_dir: &Path, args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dincharya"))
        .args(args)
        .env("DINCHARYA_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_character_list() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["character", "list", "--json"]);
    assert_eq!(code, 0, "Character list failed");

    let names: Vec<_> = json(&stdout)
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["Arjuna", "Krishna", "Bhima", "Yudhishthira", "Draupadi", "Karna"]
    );
}

#[test]
fn test_character_match() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["character", "match", "1990-07-13", "--json"]);
    assert_eq!(code, 0, "Character match failed");

    let out = json(&stdout);
    assert_eq!(out["day_of_month"], 13);
    assert_eq!(out["character"]["name"], "Krishna");
    assert_eq!(out["background"], "assets/mahabharata-bg.png");
}

#[test]
fn test_character_match_text() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["character", "match", "2024-03-12"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Arjuna"));
    assert!(stdout.contains("Practice your skills daily"));
    assert!(stdout.contains("Backdrop:     assets/mahabharata-bg.png"));
}

#[test]
fn test_character_match_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["character", "match", "13/07/1990"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Invalid birth date '13/07/1990'"), "{stderr}");
}

#[test]
fn test_routine_show_for_character() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["routine", "show", "--character", "arjuna", "--json"],
    );
    assert_eq!(code, 0, "Routine show failed");

    let routine = json(&stdout);
    let entries = routine.as_array().unwrap();
    assert_eq!(entries.len(), 15);
    let archery = entries
        .iter()
        .find(|e| e["time"] == "6:00 AM")
        .unwrap();
    assert_eq!(archery["activity"], "Archery Practice");
    assert_eq!(archery["character"], "Arjuna");
}

#[test]
fn test_routine_unknown_character() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["routine", "show", "--character", "Duryodhana"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown character: Duryodhana"));
}

#[test]
fn test_routine_current_literal_default() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["routine", "current", "--at", "10:30", "--json"]);
    assert_eq!(code, 0);

    let out = json(&stdout);
    assert_eq!(out["mode"], "literal");
    assert_eq!(out["now"], "10:30");
    assert_eq!(out["current"]["activity"], "Peaceful Sleep");
}

#[test]
fn test_routine_current_normalized_via_config() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "set", "schedule.time_mode", "normalized"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (code, stdout, _) = run_cli(dir.path(), &["routine", "current", "--at", "10:30", "--json"]);
    assert_eq!(code, 0);
    let out = json(&stdout);
    assert_eq!(out["mode"], "normalized");
    assert_eq!(out["current"]["activity"], "Karma Yoga (Duty)");
}

#[test]
fn test_routine_current_for_birth_date() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["routine", "current", "--born", "1990-07-13", "--at", "10:30", "--json"],
    );
    assert_eq!(code, 0);
    let out = json(&stdout);
    assert_eq!(out["character"], "Krishna");
}

#[test]
fn test_routine_current_rejects_bad_birth_date() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli(
        dir.path(),
        &["routine", "current", "--born", "13/07/1990", "--at", "10:30"],
    );
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid birth date '13/07/1990'"), "{stderr}");

    let (code, _, _) = run_cli(dir.path(), &["routine", "show", "--born", "1990-02-30"]);
    assert_eq!(code, 1);
}

#[test]
fn test_routine_current_rejects_bad_clock() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["routine", "current", "--at", "25:99"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("25:99"));
}

#[test]
fn test_quiz_answers_all_correct() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["quiz", "answers", "A", "C", "B", "B", "C", "--json"],
    );
    assert_eq!(code, 0, "Quiz answers failed");

    let out = json(&stdout);
    assert_eq!(out["score"], 5);
    assert_eq!(out["completed"], true);
    assert_eq!(out["message"], "🏆 Amazing! You're a Mahabharata expert!");
}

#[test]
fn test_quiz_answers_partial() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["quiz", "answers", "a", "d", "--json"]);
    assert_eq!(code, 0);

    let out = json(&stdout);
    assert_eq!(out["score"], 1);
    assert_eq!(out["completed"], false);
    assert!(out["message"].is_null());
    assert_eq!(out["answers"][1]["chosen"], "Army General");
    assert_eq!(out["answers"][1]["answer"], "Charioteer");
}

#[test]
fn test_quiz_answers_rejects_bad_letter() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["quiz", "answers", "E"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid option"));
}

#[test]
fn test_quiz_play_interactive() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_with_input(
        dir.path(),
        &["quiz", "play"],
        "a\n\nc\n\nb\n\nd\n\nc\n\nq\n",
    );
    assert_eq!(code, 0, "Quiz play failed");
    assert!(stdout.contains("Who gave Arjuna"), "{stdout}");
    assert!(stdout.contains("Question 1 of 5  Score: 0"));
    assert!(stdout.contains("Question 2 of 5  Score: 1"));
    assert!(stdout.contains("Question 5 of 5  Score: 3"));
    assert!(stdout.contains("You scored 4 out of 5"));
    assert!(stdout.contains("🏆 Amazing!"));
}

#[test]
fn test_config_get_set_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "audio.start_muted"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "false");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "audio.start_muted", "true"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "audio.start_muted"]);
    assert_eq!(stdout.trim(), "true");

    let (code, stdout, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("reset"));
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "audio.start_muted"]);
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn test_config_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "ui.colour"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key: ui.colour"));

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "schedule.time_mode", "sundial"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_list() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let out = json(&stdout);
    assert_eq!(out["schedule"]["tick_interval_secs"], 60);
    assert_eq!(out["ui"]["default_tab"], "character");
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("dincharya"));
}
