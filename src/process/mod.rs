/*!
 * Process Module
 * Process duplication, termination and command execution
 */

pub mod executor;
pub mod fork;
pub mod wait;

// Re-export for convenience
pub use executor::ShellCommand;
pub use fork::{fork_process, Branch};
pub use wait::{decode_status, ChildProcess, TerminationStatus, WaitOutcome};
