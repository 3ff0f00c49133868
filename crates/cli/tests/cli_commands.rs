use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collectify"))
        .arg("--lists-dir")
        .arg(dir)
        .args(args)
        .env_remove("COLLECTIFY_LISTS_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run collectify CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_cli(dir, &full);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).expect("CLI printed invalid JSON")
}

#[test]
fn create_writes_full_list_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["create", "My Set", "4"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "List 'My Set' created!");

    let raw = std::fs::read_to_string(dir.path().join("my_set.json")).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["list_name"], "My Set");
    assert_eq!(doc["total"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(doc["possessed"], serde_json::json!([]));
    assert_eq!(doc["missing"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(doc["image"], "default.png");
}

#[test]
fn create_rejects_name_collision_and_bad_count() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "My Set", "10"]).status.success());

    let output = run_cli(dir.path(), &["create", "my_set", "5"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("name collision"));

    let output = run_cli(dir.path(), &["create", "Other", "-2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("item count must be positive"));

    let output = run_cli(dir.path(), &["create", "Other", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("item count must be a whole number"));
    assert!(!dir.path().join("other.json").exists());
}

#[test]
fn lists_shows_unreadable_documents_alongside_good_ones() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "Good", "2"]).status.success());
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let lists = run_json(dir.path(), &["lists"]);
    let rows = lists.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["key"], "broken");
    assert!(rows[0]["error"].is_string());
    assert_eq!(rows[1]["name"], "Good");
    assert!(rows[1].get("error").is_none());
}

#[test]
fn add_show_and_remove_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "Cards", "5"]).status.success());

    let added = run_json(dir.path(), &["add", "Cards", "1-3"]);
    assert_eq!(added["completion"], 60);
    assert_eq!(added["possessed"], serde_json::json!([1, 2, 3]));

    let shown = run_json(dir.path(), &["show", "cards", "--filter", "missing"]);
    assert_eq!(shown["filter"], "missing");
    assert_eq!(
        shown["items"],
        serde_json::json!([
            { "id": 4, "owned": false },
            { "id": 5, "owned": false }
        ])
    );

    let removed = run_json(dir.path(), &["remove", "Cards", "2"]);
    assert_eq!(removed["possessed"], serde_json::json!([1, 3]));
    assert_eq!(removed["missing"], serde_json::json!([2, 4, 5]));
}

#[test]
fn add_is_all_or_nothing_on_the_command_line() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "Cards", "5"]).status.success());
    assert!(run_cli(dir.path(), &["add", "Cards", "1"]).status.success());

    let output = run_cli(dir.path(), &["add", "Cards", "2,1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid or already owned (1)"));

    let shown = run_json(dir.path(), &["show", "Cards", "--filter", "owned"]);
    assert_eq!(shown["items"], serde_json::json!([{ "id": 1, "owned": true }]));
}

#[test]
fn remove_needs_flag_for_ranges() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "Cards", "5"]).status.success());
    assert!(run_cli(dir.path(), &["add", "Cards", "1-4"]).status.success());

    let output = run_cli(dir.path(), &["remove", "Cards", "1-2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid token"));

    let removed = run_json(dir.path(), &["remove", "Cards", "1-2", "--ranges"]);
    assert_eq!(removed["possessed"], serde_json::json!([3, 4]));
}

#[test]
fn reset_rename_and_lists() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "Cards", "4", "--image", "cards.png"]).status.success());
    assert!(run_cli(dir.path(), &["add", "Cards", "1"]).status.success());
    assert!(run_cli(dir.path(), &["rename", "Cards", "Old Cards"]).status.success());

    let lists = run_json(dir.path(), &["lists"]);
    assert_eq!(
        lists,
        serde_json::json!([{
            "key": "old_cards",
            "name": "Old Cards",
            "image": "cards.png",
            "completion": 25
        }])
    );

    let reset = run_json(dir.path(), &["reset", "old cards"]);
    assert_eq!(reset["completion"], 0);
    assert!(!dir.path().join("cards.json").exists());
}

#[test]
fn text_show_marks_owned_items() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "Trio", "3"]).status.success());
    assert!(run_cli(dir.path(), &["add", "Trio", "2"]).status.success());

    let output = run_cli(dir.path(), &["show", "Trio"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("33% completed"));
    assert!(text.contains("    1      2*     3"));
}

#[test]
fn delete_twice_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_cli(dir.path(), &["create", "Cards", "2"]).status.success());

    let output = run_cli(dir.path(), &["delete", "Cards"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "List 'Cards' deleted.");

    let output = run_cli(dir.path(), &["delete", "Cards"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("already gone"));

    let output = run_cli(dir.path(), &["show", "Cards"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not found"));
}

#[test]
fn empty_directory_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["lists"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No lists available.");
}
