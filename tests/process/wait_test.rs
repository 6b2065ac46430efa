/*!
 * Wait Tests
 * Children come from std::process::Command and are adopted by pid
 */

use std::process::Command;
use std::time::Duration;

use fork_demos::{ChildProcess, Pid, ProcessError, TerminationStatus};
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use pretty_assertions::assert_eq;

fn adopt(cmd: &mut Command) -> ChildProcess {
    let child = cmd.spawn().unwrap();
    ChildProcess::from_raw(Pid::from_raw(child.id() as i32))
}

fn sh(script: &str) -> ChildProcess {
    adopt(Command::new("/bin/sh").args(["-c", script]))
}

#[test]
fn test_wait_reports_raw_and_decoded_exit() {
    let child = sh("exit 5");
    let pid = child.pid();

    let outcome = child.wait().unwrap();
    assert_eq!(outcome.pid, pid);
    assert_eq!(outcome.raw, 0x500);
    assert_eq!(outcome.status, TerminationStatus::Exited(5));
}

#[test]
fn test_wait_reports_signal() {
    let child = adopt(Command::new("sleep").arg("30"));
    kill(child.pid(), Signal::SIGKILL).unwrap();

    let outcome = child.wait().unwrap();
    assert_eq!(
        outcome.status,
        TerminationStatus::Signaled {
            signal: Signal::SIGKILL,
            core_dumped: false
        }
    );
    assert_eq!(outcome.status.exit_code(), None);
}

#[test]
fn test_wait_targets_only_the_given_child() {
    let slow = sh("sleep 0.3; exit 3");
    let fast = sh("exit 4");
    std::thread::sleep(Duration::from_millis(50));

    // `fast` is already a zombie, but only `slow` may satisfy this wait
    let slow_pid = slow.pid();
    let outcome = slow.wait().unwrap();
    assert_eq!(outcome.pid, slow_pid);
    assert_eq!(outcome.status.exit_code(), Some(3));

    let outcome = fast.wait().unwrap();
    assert_eq!(outcome.status.exit_code(), Some(4));
}

#[cfg(target_os = "linux")]
#[test]
fn test_wait_keeps_raw_word_for_realtime_signal() {
    let child = adopt(Command::new("sleep").arg("30"));
    let signal = nix::libc::SIGRTMIN() + 1;
    // SAFETY: plain kill(2) on our own child
    let res = unsafe { nix::libc::kill(child.pid().as_raw(), signal) };
    assert_eq!(res, 0);

    let outcome = child.wait().unwrap();
    assert_eq!(outcome.raw & 0x7f, signal);
    assert_eq!(outcome.status, TerminationStatus::Unrecognized(outcome.raw));
}

#[test]
fn test_wait_on_non_child_fails() {
    // pid 1 is never our child
    let err = ChildProcess::from_raw(Pid::from_raw(1)).wait().unwrap_err();
    assert_eq!(
        err,
        ProcessError::WaitFailed {
            pid: Pid::from_raw(1),
            errno: Errno::ECHILD
        }
    );
}

#[tokio::test]
async fn test_wait_async_resolves_on_termination() {
    let child = sh("sleep 0.1; exit 7");
    let outcome = child.wait_async().await.unwrap();
    assert_eq!(outcome.raw, 7 << 8);
    assert_eq!(outcome.status, TerminationStatus::Exited(7));
}
