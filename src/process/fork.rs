/*!
 * Process Duplication
 * Typed wrapper around fork(2)
 */

use std::io::{self, Write};

use nix::unistd::{fork, getpid, ForkResult};
use tracing::{error, info, warn};

use super::wait::ChildProcess;
use crate::core::errors::{ProcessError, ProcessResult};
use crate::monitoring::PrimitiveSpan;

/// Execution path taken after a duplication
#[derive(Debug)]
pub enum Branch {
    /// Running in the newly created process
    Child,
    /// Running in the original process, holding the child's handle
    Parent(ChildProcess),
}

/// Duplicate the calling process
///
/// Both processes resume from here with identical memory contents; writes made
/// by either one afterwards are private to it. A failed duplication is returned
/// as an error instead of being mistaken for the parent path.
///
/// The caller must be single-threaded: only the calling thread is duplicated.
pub fn fork_process() -> ProcessResult<Branch> {
    // Buffered text would otherwise be emitted by both processes
    if let Err(e) = io::stdout().flush() {
        warn!(error = %e, "Could not flush stdout before fork");
    }

    let parent = getpid();
    let span = PrimitiveSpan::new("fork", parent);

    // SAFETY: the demos call this from the main thread before any other thread
    // (async runtime, logging worker) exists, so the child inherits no locks
    // held by threads that do not exist in it.
    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            span.record_result(true);
            Ok(Branch::Child)
        }
        Ok(ForkResult::Parent { child }) => {
            span.record_result(true);
            info!(parent = parent.as_raw(), child = child.as_raw(), "Forked child process");
            Ok(Branch::Parent(ChildProcess::new(child)))
        }
        Err(errno) => {
            span.record_result(false);
            error!(parent = parent.as_raw(), error = %errno, "fork failed");
            Err(ProcessError::ForkFailed(errno))
        }
    }
}
