/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use nix::errno::Errno;
use thiserror::Error;

use super::types::Pid;

/// Process primitive result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Demo result
pub type DemoResult<T> = Result<T, DemoError>;

/// Errors from fork, wait and command execution
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ProcessError {
    #[error("Process duplication failed: {0}")]
    #[diagnostic(
        code(process::fork_failed),
        help("The system may be out of processes or memory. Check `ulimit -u`.")
    )]
    ForkFailed(Errno),

    #[error("Waiting for child {pid} failed: {errno}")]
    #[diagnostic(
        code(process::wait_failed),
        help("The pid must be a live, unreaped child of this process.")
    )]
    WaitFailed { pid: Pid, errno: Errno },

    #[error("Command `{command}` could not be started: {reason}")]
    #[diagnostic(
        code(process::command_failed),
        help("Check that /bin/sh exists and is executable.")
    )]
    CommandFailed { command: String, reason: String },

    #[error("Status word {raw:#x} for child {pid} could not be decoded")]
    #[diagnostic(code(process::invalid_status))]
    InvalidStatus { pid: Pid, raw: i32 },
}

/// Errors surfaced by a demo run
#[derive(Error, Debug, Diagnostic)]
pub enum DemoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("Writing demo output failed: {0}")]
    #[diagnostic(code(demo::io), help("Standard output may have been closed."))]
    Io(#[from] std::io::Error),
}
