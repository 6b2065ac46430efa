/*!
 * Fork Demos Library
 * Process duplication and termination semantics, observed from both sides
 */

pub mod core;
pub mod demos;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::errors::{DemoError, DemoResult, ProcessError, ProcessResult};
pub use crate::core::types::{Pid, Role, Stage};
pub use demos::{CopyArgs, Demo, ExitStatusArgs, IsolationArgs, Sample};
pub use monitoring::init_tracing;
pub use process::{
    decode_status, fork_process, Branch, ChildProcess, ShellCommand, TerminationStatus,
    WaitOutcome,
};
