#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rci() -> Command {
    cargo_bin_cmd!("rcheckin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI (test mode: no config file is written)
pub fn init_db(db_path: &str) {
    rci()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Init plus a small dataset: Alice in and out, Bob in.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for args in [
        ["checkin", "Alice", "Smith"],
        ["checkin", "Bob", "Jones"],
        ["checkout", "Alice", "Smith"],
    ] {
        rci().args(["--db", db_path]).args(args).assert().success();
    }
}

/// Lines of stdout whose first cell is a record id.
pub fn data_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
