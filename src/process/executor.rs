/*!
 * Command Executor
 * Runs fixed command literals through the shell, like system(3)
 */

use std::process::{Command, ExitStatus, Stdio};

use nix::unistd::getpid;
use tracing::{info, warn};

use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::limits::SHELL_PATH;
use crate::monitoring::PrimitiveSpan;

/// A command line handed verbatim to `/bin/sh -c`
///
/// No sanitisation is applied; only pass literals or operator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    literal: String,
}

impl ShellCommand {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Run to completion with the caller's stdio
    ///
    /// A non-zero exit is logged and returned, not treated as an error.
    pub fn run(&self) -> ProcessResult<ExitStatus> {
        let span = PrimitiveSpan::new("system", getpid());
        let _entered = span.enter();

        let status = Command::new(SHELL_PATH)
            .arg("-c")
            .arg(&self.literal)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ProcessError::CommandFailed {
                command: self.literal.clone(),
                reason: e.to_string(),
            })?;

        span.record_result(status.success());
        if status.success() {
            info!(command = %self.literal, "Command completed");
        } else {
            warn!(command = %self.literal, status = %status, "Command exited unsuccessfully");
        }

        Ok(status)
    }
}
