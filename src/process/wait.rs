/*!
 * Child Termination
 * Blocking (and async) wait on one specific child, with status-word decoding
 */

use std::fmt;

use nix::errno::Errno;
use nix::libc;
use nix::sys::signal::Signal;
use nix::sys::wait::WaitStatus;
use tracing::{error, info, warn};

use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::types::Pid;
use crate::monitoring::PrimitiveSpan;

/// Decoded form of an OS status word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationStatus {
    /// Normal termination with the given exit code
    Exited(i32),
    /// Terminated by a signal
    Signaled { signal: Signal, core_dumped: bool },
    /// Stopped by a signal (only reported to tracing waits)
    Stopped(Signal),
    /// Resumed by SIGCONT
    Continued,
    /// Status word with no representation above, e.g. a realtime signal
    Unrecognized(i32),
}

impl TerminationStatus {
    /// Plain exit code, if the child exited normally
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            TerminationStatus::Exited(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for TerminationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationStatus::Exited(code) => write!(f, "exited with code {}", code),
            TerminationStatus::Signaled {
                signal,
                core_dumped: false,
            } => write!(f, "killed by signal {}", signal),
            TerminationStatus::Signaled {
                signal,
                core_dumped: true,
            } => write!(f, "killed by signal {} (core dumped)", signal),
            TerminationStatus::Stopped(signal) => write!(f, "stopped by signal {}", signal),
            TerminationStatus::Continued => f.write_str("continued"),
            TerminationStatus::Unrecognized(raw) => {
                write!(f, "unrecognized status word {:#x}", raw)
            }
        }
    }
}

/// Decode a raw status word as returned by waitpid(2)
pub fn decode_status(pid: Pid, raw: i32) -> ProcessResult<TerminationStatus> {
    match WaitStatus::from_raw(pid, raw) {
        Ok(WaitStatus::Exited(_, code)) => Ok(TerminationStatus::Exited(code)),
        Ok(WaitStatus::Signaled(_, signal, core_dumped)) => Ok(TerminationStatus::Signaled {
            signal,
            core_dumped,
        }),
        Ok(WaitStatus::Stopped(_, signal)) => Ok(TerminationStatus::Stopped(signal)),
        Ok(WaitStatus::Continued(_)) => Ok(TerminationStatus::Continued),
        Ok(_) | Err(_) => Err(ProcessError::InvalidStatus { pid, raw }),
    }
}

/// Result of waiting on a child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOutcome {
    pub pid: Pid,
    /// Status word exactly as the OS reported it
    pub raw: i32,
    pub status: TerminationStatus,
}

/// Handle to a running child
///
/// Waiting consumes the handle, so each child is reaped exactly once.
#[derive(Debug)]
#[must_use = "a child that is never waited on stays a zombie until the parent exits"]
pub struct ChildProcess {
    pid: Pid,
}

impl ChildProcess {
    pub(crate) fn new(pid: Pid) -> Self {
        Self { pid }
    }

    /// Adopt a child created elsewhere (e.g. by `std::process::Command`)
    ///
    /// The pid must belong to an unreaped child of the calling process, and
    /// nothing else may reap it.
    pub fn from_raw(pid: Pid) -> Self {
        Self { pid }
    }

    #[must_use]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Block until this child terminates
    ///
    /// Only this child's termination satisfies the wait. Interrupted waits are
    /// retried; there is no timeout.
    pub fn wait(self) -> ProcessResult<WaitOutcome> {
        let span = PrimitiveSpan::new("waitpid", self.pid);
        let _entered = span.enter();

        let mut raw: libc::c_int = 0;
        loop {
            // SAFETY: `raw` is a valid, writable c_int for the duration of the call.
            let res = unsafe { libc::waitpid(self.pid.as_raw(), &mut raw, 0) };
            match Errno::result(res) {
                Ok(_) => break,
                Err(Errno::EINTR) => continue,
                Err(errno) => {
                    span.record_result(false);
                    error!(pid = self.pid.as_raw(), error = %errno, "waitpid failed");
                    return Err(ProcessError::WaitFailed {
                        pid: self.pid,
                        errno,
                    });
                }
            }
        }

        // The child is reaped at this point; the raw word must survive a failed decode
        let status = decode_status(self.pid, raw).unwrap_or_else(|e| {
            warn!(
                pid = self.pid.as_raw(),
                raw = raw,
                error = %e,
                "Keeping undecodable status word"
            );
            TerminationStatus::Unrecognized(raw)
        });
        span.record_result(true);
        info!(pid = self.pid.as_raw(), raw = raw, status = %status, "Child terminated");

        Ok(WaitOutcome {
            pid: self.pid,
            raw,
            status,
        })
    }

    /// Resolve once this child terminates
    ///
    /// The blocking wait runs on the runtime's blocking pool, so async callers
    /// are not stalled.
    pub async fn wait_async(self) -> ProcessResult<WaitOutcome> {
        let pid = self.pid;
        match tokio::task::spawn_blocking(move || self.wait()).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => Err(ProcessError::WaitFailed {
                pid,
                errno: Errno::ECANCELED,
            }),
        }
    }
}
