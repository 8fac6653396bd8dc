#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lsl() -> Command {
    cargo_bin_cmd!("letssleep")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_letssleep.sqlite", name, std::process::id()));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB in test mode (config file untouched)
pub fn init_db(db_path: &str) {
    lsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry without prompting
pub fn add_entry(db_path: &str, at: &str, kind: &str) {
    lsl()
        .args(["--db", db_path, "add", "--at", at, "--kind", kind, "--yes"])
        .assert()
        .success();
}

/// Rows of `list` output that describe entries (they start with the id)
pub fn entry_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

pub fn list_json(db_path: &str) -> serde_json::Value {
    let out = lsl()
        .args(["--db", db_path, "list", "--json"])
        .output()
        .expect("failed to run list --json");
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).expect("list --json prints valid JSON")
}
