//! End-to-end tests driving the `pawprint` binary.
//!
//! Each test gets its own HOME and database so runs are isolated.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn pawprint_binary() -> String {
    env!("CARGO_BIN_EXE_pawprint").to_string()
}

fn db_path(temp: &Path) -> PathBuf {
    temp.join("data").join("pawprint.db")
}

/// Run the binary with an isolated environment.
fn pawprint(temp: &Path, args: &[&str]) -> Output {
    Command::new(pawprint_binary())
        .env("HOME", temp)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .env_remove("RUST_LOG")
        .env("PAWPRINT_DATABASE_PATH", db_path(temp))
        .args(args)
        .output()
        .expect("failed to run pawprint")
}

fn success(temp: &Path, args: &[&str]) -> String {
    let output = pawprint(temp, args);
    assert!(
        output.status.success(),
        "pawprint {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is utf-8")
}

#[test]
fn test_log_then_list_and_status() {
    let temp = TempDir::new().unwrap();

    let wake_id = success(temp.path(), &["log", "wake", "--at", "2 hours ago"]);
    let pee_id = success(temp.path(), &["log", "pee", "--note", "garden", "--at", "10 minutes ago"]);
    assert_ne!(wake_id.trim(), pee_id.trim());
    assert!(db_path(temp.path()).exists());

    let list = success(temp.path(), &["list"]);
    let lines: Vec<&str> = list.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("garden"), "newest first: {list}");
    assert!(lines[0].contains("10 minutes ago"));
    assert!(lines[1].contains("Wake"));
    assert!(lines[1].contains("2 hours 0 minutes ago"));

    let status = success(temp.path(), &["status"]);
    let lines: Vec<&str> = status.lines().collect();
    assert_eq!(lines[0], "Winnie's been awake for 2 hours 0 minutes");
    assert_eq!(lines[1], "Last pee: 10 minutes ago");
    assert_eq!(lines[2], "Last poop: No entries found");
}

#[test]
fn test_pet_name_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "pet_name = \"Biscuit\"\ntracked_types = [\"Feed\"]\n").unwrap();
    let config = config.to_str().unwrap();

    let status = success(temp.path(), &["--config", config, "status"]);
    assert_eq!(status, "Biscuit's overview\nLast feed: No entries found\n");
}

#[test]
fn test_future_entry_is_upcoming() {
    let temp = TempDir::new().unwrap();
    success(temp.path(), &["log", "feed", "--at", "in 1 hour"]);

    let list = success(temp.path(), &["list"]);
    assert!(list.contains("(Upcoming)"), "{list}");
}

#[test]
fn test_edit_and_delete_by_prefix() {
    let temp = TempDir::new().unwrap();
    let id = success(temp.path(), &["log", "sleep", "--at", "30 minutes ago"]);
    let id = id.trim();
    let prefix = &id[..8];

    success(temp.path(), &["edit", prefix, "--type", "wake", "--note", "early riser"]);
    let list = success(temp.path(), &["list", "--json"]);
    let entry: serde_json::Value = serde_json::from_str(list.trim()).unwrap();
    assert_eq!(entry["id"], id);
    assert_eq!(entry["type"], "Wake");
    assert_eq!(entry["note"], "early riser");

    let deleted = success(temp.path(), &["delete", prefix]);
    assert_eq!(deleted, format!("Deleted {id} (early riser)\n"));
    let list = success(temp.path(), &["list"]);
    assert!(list.starts_with("No entries yet"));
}

#[test]
fn test_delete_unknown_entry_fails() {
    let temp = TempDir::new().unwrap();
    let output = pawprint(temp.path(), &["delete", "does-not-exist"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("entry not found"), "{stderr}");
}

#[test]
fn test_clear_requires_yes() {
    let temp = TempDir::new().unwrap();
    success(temp.path(), &["log", "pee"]);
    success(temp.path(), &["log", "poop"]);

    let output = pawprint(temp.path(), &["clear"]);
    assert!(!output.status.success());

    let cleared = success(temp.path(), &["clear", "--yes"]);
    assert_eq!(cleared, "Deleted 2 entries\n");
    let status = success(temp.path(), &["status"]);
    assert!(status.starts_with("Winnie's overview"));
}

#[test]
fn test_unknown_type_is_rejected() {
    let temp = TempDir::new().unwrap();
    let output = pawprint(temp.path(), &["log", "walk"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown entry type: walk"), "{stderr}");
}

#[test]
fn test_status_json() {
    let temp = TempDir::new().unwrap();
    success(temp.path(), &["log", "sleep", "--at", "3 minutes ago"]);

    let status = success(temp.path(), &["status", "--json"]);
    let json: serde_json::Value = serde_json::from_str(status.trim()).unwrap();
    assert_eq!(json["state"], "asleep");
    assert_eq!(json["status"], "Winnie's been asleep for 3 minutes");
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
}

#[test]
fn test_list_rejects_zero_limit() {
    let temp = TempDir::new().unwrap();
    success(temp.path(), &["log", "feed"]);

    let output = pawprint(temp.path(), &["list", "--limit", "0"]);
    assert!(!output.status.success());
}
