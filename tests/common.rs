#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use leaveplanner::core::roster::Roster;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const COMMUTER: &str = "(к)";
pub const REQUEST: &str = "(рапорт)";

/// Binary command with HOME pointed at an empty temp dir, so no user
/// configuration leaks into the test.
pub fn lp(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("leaveplanner");
    cmd.env("HOME", temp_home(name))
        .env("APPDATA", temp_home(name))
        .env_remove("LEAVEPLANNER_LOG");
    cmd
}

/// Create (or reset) a fake home directory inside the system temp dir
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_leaveplanner_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Write a roster file inside the system temp dir and return its path
pub fn setup_roster(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roster.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write roster");
    p
}

/// Path of a roster file that is guaranteed not to exist
pub fn missing_roster(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_roster.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two dormitory cadets and one commuter
pub fn sample_roster() -> Roster {
    Roster::parse("Іваненко\nПетренко (к)\nСидоренко\n", COMMUTER)
}
