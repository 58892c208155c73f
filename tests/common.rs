#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so the user's real
/// config is never read.
pub fn rtc() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtimeclock_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtimeclock");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique data file path inside the system temp dir and remove any existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Raw JSON array stored in the data file
pub fn read_entries(data_path: &str) -> Vec<Value> {
    let content = fs::read_to_string(data_path).expect("read data file");
    serde_json::from_str::<Vec<Value>>(&content).expect("parse data file")
}

/// Initialize the data file and add a small dataset useful for many tests
pub fn init_data_with_entries(data_path: &str) {
    rtc()
        .args(["--data", data_path, "--test", "init"])
        .assert()
        .success();

    for (ts, kind, note) in [
        ("2025-09-01T09:00:00+02:00", "in", "office"),
        ("2025-09-01T17:30:00+02:00", "out", "office"),
        ("2025-09-02T08:45:00+02:00", "entrada", ""),
    ] {
        let mut cmd = rtc();
        cmd.args(["--data", data_path, "add", ts, kind]);
        if !note.is_empty() {
            cmd.args(["--note", note]);
        }
        cmd.assert().success();
    }
}
