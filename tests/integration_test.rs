use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slidedeckml"))
        .args(args)
        .env_remove("SLIDEDECK_THEME")
        .env_remove("SLIDEDECK_TRANSITION")
        .env_remove("SLIDEDECK_REVEAL_URL")
        .env_remove("SLIDEDECK_BACKGROUND_TRANSITION")
        .output()
        .expect("Failed to execute command")
}

const SAMPLE_TREE: &str = r##"{
    "metadata": {"title": "\"CLI Deck\"", "author": "\"Grace\""},
    "slides": [{"blocks": [{"lines": [
        {"$type": "Header", "level": "#", "text": "Test Slide"},
        {"$type": "Paragraph", "text": "This is a *test* slide."}
    ]}]}]
}"##;

#[test]
fn test_compile_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let input_path = temp_path.join("deck.json");
    fs::write(&input_path, SAMPLE_TREE).expect("Failed to write document tree");

    let output_path = temp_path.join("out").join("deck.html");

    let output = run_command(&[
        "compile",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "Output file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Compiling"));
    assert!(stdout.contains("Generated:"));

    let html_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html_content.contains("<h1>Test Slide</h1>"), "Missing heading");
    assert!(
        html_content.contains("<p>This is a <em>test</em> slide.</p>"),
        "Missing paragraph"
    );
    assert!(html_content.contains("<title>CLI Deck</title>"), "Missing title");
    assert!(
        html_content.contains("<meta name=\"author\" content=\"Grace\">"),
        "Missing author"
    );
}

#[test]
fn test_compile_with_theme_and_transition() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("deck.json");
    fs::write(&input_path, SAMPLE_TREE).expect("Failed to write document tree");
    let output_path = temp_dir.path().join("deck.html");

    let output = run_command(&[
        "compile",
        input_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
        "--theme",
        "night",
        "--transition",
        "convex",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let html_content = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(html_content.contains("reveal.js@5.0.4/dist/theme/night.css"));
    assert!(html_content.contains("transition: 'convex',"));
}

#[test]
fn test_compile_missing_input_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing.json");
    let output_path = temp_dir.path().join("deck.html");

    let output = run_command(&[
        "compile",
        missing.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("Path not found"), "stderr: {}", stderr);
    assert!(!output_path.exists());
}

#[test]
fn test_compile_rejects_bad_theme() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("deck.json");
    fs::write(&input_path, SAMPLE_TREE).expect("Failed to write document tree");

    let output = run_command(&[
        "compile",
        input_path.to_str().unwrap(),
        "--theme",
        "../evil",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}
