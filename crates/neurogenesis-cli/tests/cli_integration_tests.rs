//! End-to-end tests for the `ngen` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct TestEnv {
    _config_dir: TempDir,
    notes: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let config_dir = TempDir::new().unwrap();
        let notes = TempDir::new().unwrap();
        let config_path = config_dir.path().join("config.json");
        let config = serde_json::json!({ "notes_directory": notes.path() });
        fs::write(&config_path, config.to_string()).unwrap();

        Self {
            _config_dir: config_dir,
            notes,
            config_path,
        }
    }

    fn ngen(&self) -> Command {
        let mut cmd = Command::cargo_bin("ngen").unwrap();
        cmd.env_remove("NEUROGENESIS_NOTES_DIR")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }

    fn notes_dir(&self) -> &Path {
        self.notes.path()
    }

    fn index(&self) -> Vec<Value> {
        let raw = fs::read_to_string(self.notes_dir().join(".database.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

#[test]
fn empty_directory_rebuild_then_read() {
    let env = TestEnv::new();

    env.ngen()
        .arg("refresh")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Updated Database in "));

    env.ngen().arg("get_nodes").assert().success().stdout("[]\n");
}

#[test]
fn read_index_before_rebuild_fails() {
    let env = TestEnv::new();

    env.ngen()
        .arg("get_nodes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index not found"));
}

#[test]
fn new_note_is_written_and_indexed() {
    let env = TestEnv::new();

    let output = env
        .ngen()
        .args(["new", "--title", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created a new node with ID:"))
        .stdout(predicate::str::contains("and TITLE:Hello"))
        .stdout(predicate::str::contains("Updated Database in "))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let id = stdout
        .split("ID:")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap()
        .to_string();

    let note = fs::read_to_string(env.notes_dir().join(format!("{id}.md"))).unwrap();
    assert_eq!(note, format!("---\nID:{id}\nTITLE:Hello\nTAGS:\n---\n"));

    let index = env.index();
    assert_eq!(index.len(), 1);
    assert_eq!(
        index[0],
        serde_json::json!({ "id": id, "title": "Hello", "tags": [""] })
    );
}

#[test]
fn existing_note_scenario() {
    let env = TestEnv::new();
    fs::write(
        env.notes_dir().join("abc.md"),
        "---\nID:abc\nTITLE:Hello\nTAGS:x,y\n---\nSome body text\n",
    )
    .unwrap();

    env.ngen().arg("rebuild").assert().success();

    env.ngen()
        .arg("read-index")
        .assert()
        .success()
        .stdout("[{\"id\":\"abc\",\"title\":\"Hello\",\"tags\":[\"x\",\"y\"]}]\n");
}

#[test]
fn index_count_matches_note_files() {
    let env = TestEnv::new();

    for i in 0..5 {
        env.ngen()
            .args(["create", "--title", &format!("Note {i}")])
            .assert()
            .success();
    }
    fs::write(env.notes_dir().join("ignored.txt"), "plain").unwrap();

    env.ngen().arg("refresh").assert().success();
    assert_eq!(env.index().len(), 5);
}

#[test]
fn repeated_rebuild_is_byte_identical() {
    let env = TestEnv::new();
    for title in ["one", "two", "three"] {
        env.ngen().args(["new", "--title", title]).assert().success();
    }

    let index_path = env.notes_dir().join(".database.json");
    env.ngen().arg("refresh").assert().success();
    let first = fs::read(&index_path).unwrap();
    env.ngen().arg("refresh").assert().success();
    let second = fs::read(&index_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn malformed_note_fails_and_keeps_previous_index() {
    let env = TestEnv::new();
    env.ngen().args(["new", "--title", "Fine"]).assert().success();
    let before = fs::read_to_string(env.notes_dir().join(".database.json")).unwrap();

    fs::write(env.notes_dir().join("short.md"), "---\nID:x\n").unwrap();

    env.ngen()
        .arg("refresh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed header"));

    let after = fs::read_to_string(env.notes_dir().join(".database.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn new_note_id_is_reported_when_rebuild_fails() {
    let env = TestEnv::new();
    fs::write(env.notes_dir().join("short.md"), "---\nID:x\n").unwrap();

    env.ngen()
        .args(["new", "--title", "Lost"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created a new node with ID:"))
        .stdout(predicate::str::contains("and TITLE:Lost"))
        .stdout(predicate::str::contains("Updated Database").not());

    let notes = fs::read_dir(env.notes_dir()).unwrap().count();
    assert_eq!(notes, 2);
}

#[test]
fn header_error_is_reported_once() {
    let env = TestEnv::new();
    fs::write(env.notes_dir().join("short.md"), "---\nID:x\n").unwrap();

    let output = env
        .ngen()
        .arg("refresh")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();

    assert!(stderr.contains("Malformed header in"));
    assert_eq!(stderr.matches("header line 2 is missing").count(), 1);
}

#[test]
fn notes_dir_flag_overrides_config() {
    let env = TestEnv::new();
    let other = TempDir::new().unwrap();

    env.ngen()
        .arg("--notes-dir")
        .arg(other.path())
        .arg("refresh")
        .assert()
        .success();

    assert!(other.path().join(".database.json").exists());
    assert!(!env.notes_dir().join(".database.json").exists());
}

#[test]
fn notes_dir_env_overrides_config() {
    let env = TestEnv::new();
    let other = TempDir::new().unwrap();

    env.ngen()
        .env("NEUROGENESIS_NOTES_DIR", other.path())
        .arg("refresh")
        .assert()
        .success();

    assert!(other.path().join(".database.json").exists());
}

#[test]
fn missing_notes_directory_fails() {
    let env = TestEnv::new();
    let missing = env.notes_dir().join("does-not-exist");

    env.ngen()
        .arg("-d")
        .arg(&missing)
        .arg("refresh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notes directory not found"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("ngen")
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("absent.json"))
        .arg("refresh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn default_config_is_created_on_first_run() {
    let home = TempDir::new().unwrap();
    let notes = TempDir::new().unwrap();

    Command::cargo_bin("ngen")
        .unwrap()
        .env("HOME", home.path())
        .env("NEUROGENESIS_NOTES_DIR", notes.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized a new configuration file at"))
        .stderr(predicate::str::contains("No config file at"));

    let created = home.path().join(".config/neurogenesis/config.json");
    let contents = fs::read_to_string(created).unwrap();
    assert_eq!(contents, r#"{"notes_directory":"~/cerebrum"}"#);
}

#[test]
fn logs_stay_off_stdout() {
    let env = TestEnv::new();
    env.ngen().arg("refresh").assert().success();

    env.ngen()
        .args(["--log-level", "debug", "get_nodes"])
        .assert()
        .success()
        .stdout("[]\n");
}
