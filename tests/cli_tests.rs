use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{lp, setup_roster, temp_home};

#[test]
fn test_schedule_command_prints_defaults() {
    let path = setup_roster("cli_schedule", "Іваненко\nПетренко (к)\n");

    lp("cli_schedule")
        .args(["--roster", &path, "schedule"])
        .assert()
        .success()
        .stdout(contains("С-41 звільнення"))
        .stdout(contains("(19:30-07:30):\nПетренко\n"))
        .stdout(contains("Список курсантів").not());
}

#[test]
fn test_config_print_shows_roster_override() {
    lp("cli_config_print")
        .args(["--roster", "my_group.txt", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("roster_file: my_group.txt"))
        .stdout(contains("request_marker:"));
}

#[test]
fn test_init_writes_default_config() {
    let home = temp_home("cli_init");
    let conf: PathBuf = [home.as_str(), ".leaveplanner", "leaveplanner.conf"]
        .iter()
        .collect();
    fs::remove_file(&conf).ok();

    lp("cli_init").arg("init").assert().success();

    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("roster_file: group_cN.txt"));
}

#[test]
fn test_config_file_changes_labels() {
    let home = temp_home("cli_custom_config");
    let dir: PathBuf = [home.as_str(), ".leaveplanner"].iter().collect();
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("leaveplanner.conf"),
        "group_name: С-42\nrequest_marker: \"[R]\"\n",
    )
    .unwrap();

    let path = setup_roster("cli_custom_config", "Іваненко\n");

    lp("cli_custom_config")
        .args(["--roster", &path])
        .write_stdin("1\n4\n3\n12:00-13:00\n0\n0\n")
        .assert()
        .success()
        .stdout(contains("С-42 звільнення"))
        .stdout(contains("(12:00-13:00):\nІваненко [R]\n"));
}

#[test]
fn test_broken_config_is_fatal() {
    let home = temp_home("cli_broken_config");
    let dir: PathBuf = [home.as_str(), ".leaveplanner"].iter().collect();
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("leaveplanner.conf"), "group_name: [unclosed\n").unwrap();

    lp("cli_broken_config")
        .arg("schedule")
        .assert()
        .failure()
        .stderr(contains("Failed to load configuration"));
}
