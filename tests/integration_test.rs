use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const DECK: &str = r#"[
    {
        "title": {"rawText": "Welcome"},
        "subtitle": {"rawText": "A <short> talk"},
        "bodies": [
            {"rawText": "Intro\n- x\n- y\nOutro", "listMarkers": [{"start": 6, "end": 13, "type": "unordered"}]}
        ]
    },
    {
        "bodies": [
            {"rawText": "broken", "listMarkers": [{"start": 2, "end": 40, "type": "ordered"}]}
        ]
    },
    {
        "title": {"rawText": "Thanks"},
        "bodies": [{"rawText": "1. one\n2. two", "listMarkers": [{"start": 0, "end": 13, "type": "ordered"}]}]
    }
]"#;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_big-deck"))
        .args(args)
        .env_remove("BIG_DECK_ON_ERROR")
        .env_remove("BIG_DECK_SEPARATOR")
        .env_remove("BIG_DECK_TITLE")
        .env_remove("BIG_DECK_PARALLEL")
        .output()
        .expect("Failed to execute command")
}

fn write_deck(dir: &Path) -> String {
    let path = dir.join("deck.json");
    fs::write(&path, DECK).expect("Failed to write deck file");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_generate_html_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = write_deck(temp_dir.path());
    let output_path = temp_dir.path().join("out/index.html");

    let output = run_command(&[
        "generate-html",
        "-i",
        &deck_path,
        "-o",
        output_path.to_str().unwrap(),
        "--title",
        "Demo",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "Output file was not created");

    let html = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html.contains("<title>Demo</title>"));
    assert!(html.contains(
        "<section class='slide'>\n<h2>Welcome</h2>\n<h3>A &lt;short&gt; talk</h3>\n<p>Intro</p>\n<ul><li>- x</li>\n<li>- y</li></ul>\n<p>Outro</p>\n</section>"
    ));
    assert!(html.contains("<!-- slide 2 failed to render"));
    assert!(html.contains("<ol><li>1. one</li>\n<li>2. two</li></ol>"));
}

#[test]
fn test_generate_html_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = write_deck(temp_dir.path());

    let output = run_command(&["generate-html", "-i", &deck_path, "--parallel"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert_eq!(stdout.matches("<section class='slide'>").count(), 2);
}

#[test]
fn test_fragments_skip_failed_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = write_deck(temp_dir.path());

    let output = run_command(&["fragments", "-i", &deck_path, "--on-error", "skip"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("<html"));
    assert!(!stdout.contains("failed to render"));
    assert_eq!(stdout.matches("<section class='slide'>").count(), 2);
    assert!(stdout.find("Welcome").unwrap() < stdout.find("Thanks").unwrap());
}

#[test]
fn test_empty_deck() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = temp_dir.path().join("deck.json");
    fs::write(&deck_path, "[]").unwrap();

    let output = run_command(&["fragments", "-i", deck_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing.json");

    let output = run_command(&["generate-html", "-i", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path not found"));
}

#[test]
fn test_invalid_failure_policy_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let deck_path = write_deck(temp_dir.path());

    let output = run_command(&["fragments", "-i", &deck_path, "--on-error", "explode"]);
    assert!(!output.status.success());
}
