/*!
 * Exit-Status Propagation Tests
 * Short delays and echo/ls stand in for the default listing commands
 */

use std::process::Command;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::{line_index, procdemo, stdout_of};

const STATUS_PREFIX: &str = "In parent process: exit status from child is decimal ";

fn quick_demo(dir: &TempDir) -> Command {
    let mut cmd = procdemo();
    cmd.arg("exit-status")
        .current_dir(dir.path())
        .env("FORKDEMO_PROCESS_LISTING", "echo process-listing-ran")
        .env("FORKDEMO_FILE_LISTING", "ls")
        .env("FORKDEMO_CHILD_DELAY_MS", "300")
        .env("FORKDEMO_PARENT_DELAY_MS", "50");
    cmd
}

fn scratch_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), b"x").unwrap();
    dir
}

/// (decimal, hex) fields of the parent's raw status line
fn raw_status(stdout: &str) -> (i32, String) {
    let line = stdout
        .lines()
        .find_map(|l| l.strip_prefix(STATUS_PREFIX))
        .unwrap_or_else(|| panic!("no status line in:\n{}", stdout));
    let (decimal, hex) = line.split_once(", hexa ").unwrap();
    (decimal.parse().unwrap(), hex.to_string())
}

#[test]
fn test_raw_status_word_for_code_five() {
    let dir = scratch_dir();
    let output = quick_demo(&dir).output().unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);

    let (decimal, hex) = raw_status(&stdout);
    assert_eq!(decimal, 1280);
    assert_eq!(hex, "500");
    // Standard decoding: low 7 bits clear, exit code in the next byte
    assert_eq!(decimal & 0x7f, 0);
    assert_eq!((decimal >> 8) & 0xff, 5);
    assert!(stdout.contains("Decoded child status: exited with code 5"));
}

#[test]
fn test_child_work_precedes_parent_report() {
    let dir = scratch_dir();
    let output = quick_demo(&dir).output().unwrap();
    let stdout = stdout_of(&output);

    let first = line_index(&stdout, "process-listing-ran").unwrap();
    let second = line_index(&stdout, "marker.txt").unwrap();
    let child_exit = line_index(&stdout, "Child exiting with code 5").unwrap();
    let report = line_index(&stdout, STATUS_PREFIX).unwrap();

    assert!(first < second);
    assert!(second < child_exit);
    assert!(child_exit < report);
}

#[test]
fn test_parent_blocks_until_child_is_done() {
    let dir = scratch_dir();
    let start = Instant::now();
    let output = quick_demo(&dir)
        .env("FORKDEMO_CHILD_DELAY_MS", "600")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(start.elapsed() >= Duration::from_millis(600));
    assert!(stdout_of(&output).contains(STATUS_PREFIX));
}

#[test]
fn test_custom_exit_code() {
    let dir = scratch_dir();
    let output = quick_demo(&dir)
        .args(["--exit-code", "3"])
        .output()
        .unwrap();
    let stdout = stdout_of(&output);

    let (decimal, hex) = raw_status(&stdout);
    assert_eq!(decimal, 768);
    assert_eq!(hex, "300");
    assert!(stdout.contains("Child exiting with code 3"));
}

#[test]
fn test_failing_command_does_not_change_outcome() {
    let dir = scratch_dir();
    let output = quick_demo(&dir)
        .env("FORKDEMO_PROCESS_LISTING", "no-such-command-for-forkdemo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert_eq!(raw_status(&stdout).0, 1280);
    assert!(line_index(&stdout, "marker.txt").is_some());
}
