// Integration tests that drive the wordle_game binary

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordle_game"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn temp_wordlist(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "wordle_game_cli_{}_{name}.txt",
        std::process::id()
    ));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn check_solved_first_try() {
    let output = run(&["check", "crane", "crane"], "");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("CRANE"));
    assert!(out.contains("Solved in 1 guess"), "{out}");
    assert!(!out.contains("1 guesses"));
}

#[test]
fn check_reports_feedback_rows() {
    let output = run(&["check", "abide", "speed", "abide"], "");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("SPEED ⬜⬜🟨⬜🟨"), "{out}");
    assert!(out.contains("Solved in 2 guesses"));
}

#[test]
fn check_unknown_secret_fails() {
    let output = run(&["check", "xyzzy", "crane"], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not in the word list"));
}

#[test]
fn max_guesses_range_is_enforced() {
    for bad in ["0", "21", "many"] {
        let output = run(&["-g", bad, "check", "crane", "crane"], "");
        assert!(!output.status.success(), "-g {bad} was accepted");
    }

    let output = run(&["-g", "1", "check", "crane", "slate", "crane"], "");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Not solved in 1 guess"), "{out}");
    assert!(out.contains("already over"));
}

#[test]
fn play_is_the_default_command() {
    let output = run(&["--seed", "7"], "quit\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Guess the 5-letter word in 6 tries."), "{out}");
    assert!(out.contains("Thanks for playing"));
}

#[test]
fn play_respects_max_guesses() {
    let output = run(&["-g", "3", "--seed", "7", "play"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("in 3 tries."));
}

#[test]
fn custom_wordlist_is_loaded() {
    let path = temp_wordlist("three", "# short words\ncat dog\nemu\n");
    let path_str = path.to_str().unwrap();

    let output = run(&["-w", path_str, "check", "dog", "cat", "dog"], "");
    fs::remove_file(&path).ok();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("DOG"));
    assert!(out.contains("Solved in 2 guesses"), "{out}");
}

#[test]
fn missing_wordlist_fails() {
    let output = run(&["-w", "/nonexistent/wordle_words.txt", "check", "crane", "crane"], "");

    assert!(!output.status.success());
}
