use std::fs;
use std::path::Path;

use assert_cmd::Command;
use filetime::{FileTime, set_file_mtime};
use predicates::prelude::*;
use tempfile::TempDir;

fn replisync() -> Command {
    let mut cmd = Command::cargo_bin("replisync").unwrap();
    cmd.env_remove("REPLISYNC_SOURCE_PATH")
        .env_remove("REPLISYNC_REPLICA_PATH")
        .env("RUST_LOG", "info")
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("replisync-no-global-config"));
    cmd
}

fn roots_args<'a>(source: &'a Path, replica: &'a Path) -> [&'a std::ffi::OsStr; 5] {
    [
        "--no-config".as_ref(),
        "--source-path".as_ref(),
        source.as_os_str(),
        "--replica-path".as_ref(),
        replica.as_os_str(),
    ]
}

#[test]
fn test_help_output() {
    replisync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replica Directory Synchronization Tool",
        ))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("once"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_output() {
    replisync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_missing_paths_is_config_error() {
    replisync()
        .args(["--no-config", "once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source path is required"));
}

#[test]
fn test_config_and_no_config_conflict() {
    replisync()
        .args(["--config", "x.toml", "--no-config", "config"])
        .assert()
        .failure();
}

#[test]
fn test_once_copies_and_removes() {
    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();
    fs::write(source.path().join("a.txt"), "alpha").unwrap();
    fs::create_dir(source.path().join("subdir")).unwrap();
    fs::write(source.path().join("subdir").join("x.txt"), "x").unwrap();
    fs::write(replica.path().join("old.txt"), "old").unwrap();

    replisync()
        .args(roots_args(source.path(), replica.path()))
        .arg("once")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed:  1"))
        .stdout(predicate::str::contains("Copied:   2"));

    assert_eq!(
        fs::read_to_string(replica.path().join("a.txt")).unwrap(),
        "alpha"
    );
    assert!(replica.path().join("subdir/x.txt").exists());
    assert!(!replica.path().join("old.txt").exists());

    replisync()
        .args(roots_args(source.path(), replica.path()))
        .arg("once")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already in sync"));
}

#[test]
fn test_once_dry_run_changes_nothing() {
    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();
    fs::write(source.path().join("a.txt"), "alpha").unwrap();

    replisync()
        .args(roots_args(source.path(), replica.path()))
        .args(["--dry-run", "once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(!replica.path().join("a.txt").exists());
}

#[test]
fn test_once_fails_on_non_empty_replica_directory() {
    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();
    fs::create_dir(replica.path().join("stuck")).unwrap();
    fs::write(replica.path().join("stuck").join("inner.txt"), "x").unwrap();

    replisync()
        .args(roots_args(source.path(), replica.path()))
        .arg("once")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sync cycle failed"));
}

#[test]
fn test_missing_source_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");

    replisync()
        .args(roots_args(&missing, tmp.path()))
        .args(["run", "--max-cycles", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source path not found"));
}

#[test]
fn test_run_stops_at_max_cycles() {
    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();
    fs::write(source.path().join("a.txt"), "alpha").unwrap();

    replisync()
        .args(roots_args(source.path(), replica.path()))
        .args(["--interval", "1", "run", "--max-cycles", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stopped after 1 cycle(s), 0 failed"));

    assert!(replica.path().join("a.txt").exists());
}

#[test]
fn test_status_lists_pending_without_applying() {
    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();
    fs::write(source.path().join("report.txt"), "v2").unwrap();
    fs::write(replica.path().join("report.txt"), "v1").unwrap();
    set_file_mtime(source.path().join("report.txt"), FileTime::from_unix_time(200, 0)).unwrap();
    set_file_mtime(replica.path().join("report.txt"), FileTime::from_unix_time(100, 0)).unwrap();

    replisync()
        .args(roots_args(source.path(), replica.path()))
        .args(["--verbose", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending actions (1)"))
        .stdout(predicate::str::contains("report.txt: source newer"));

    assert_eq!(
        fs::read_to_string(replica.path().join("report.txt")).unwrap(),
        "v1"
    );
}

#[test]
fn test_config_file_supplies_paths() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("src")).unwrap();
    fs::create_dir(tmp.path().join("dst")).unwrap();
    let config_file = tmp.path().join("replisync.toml");
    fs::write(
        &config_file,
        "source_path = \"src\"\nreplica_path = \"dst\"\ninterval_secs = 42\n",
    )
    .unwrap();

    replisync()
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&config_file)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interval:     42s"))
        .stdout(predicate::str::contains("dst"));
}

#[test]
fn test_log_file_written() {
    let source = TempDir::new().unwrap();
    let replica = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let log_dir = logs.path().join("nested");
    fs::write(source.path().join("a.txt"), "alpha").unwrap();

    replisync()
        .args(roots_args(source.path(), replica.path()))
        .arg("--log-path")
        .arg(&log_dir)
        .arg("once")
        .assert()
        .success();

    let log_files: Vec<_> = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(log_files.len(), 1);
    assert!(log_files[0].starts_with("logfiles_"));

    let content = fs::read_to_string(log_dir.join(&log_files[0])).unwrap();
    assert!(content.contains("copying entries from source"));
}

#[test]
fn test_replica_inside_source_is_rejected() {
    let source = TempDir::new().unwrap();
    let replica = source.path().join("mirror");
    fs::create_dir(&replica).unwrap();

    replisync()
        .args(roots_args(source.path(), &replica))
        .arg("once")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is inside source"));
}
