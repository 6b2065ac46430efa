/*!
 * Exit-Status Propagation
 *
 * The child runs a process listing, pauses, runs a file listing and exits
 * with a fixed code. The parent sleeps for a shorter while, waits for that
 * child and prints the raw status word the OS handed back: in decimal and in
 * hex, undecoded, followed by its decoded meaning.
 */

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Args;
use tracing::{info, instrument, warn};

use crate::core::errors::DemoResult;
use crate::core::limits::{
    DEFAULT_CHILD_DELAY, DEFAULT_CHILD_EXIT_CODE, DEFAULT_FILE_LISTING, DEFAULT_PARENT_DELAY,
    DEFAULT_PROCESS_LISTING,
};
use crate::core::types::Role;
use crate::process::{fork_process, Branch, ShellCommand, WaitOutcome};

#[derive(Debug, Clone, Args)]
pub struct ExitStatusArgs {
    /// Command the child runs first
    #[clap(long, env = "FORKDEMO_PROCESS_LISTING", default_value = DEFAULT_PROCESS_LISTING)]
    pub process_listing: String,

    /// Command the child runs after its delay
    #[clap(long, env = "FORKDEMO_FILE_LISTING", default_value = DEFAULT_FILE_LISTING)]
    pub file_listing: String,

    /// Child pause between the two commands, in milliseconds
    #[clap(long, env = "FORKDEMO_CHILD_DELAY_MS", default_value_t = DEFAULT_CHILD_DELAY.as_millis() as u64)]
    pub child_delay_ms: u64,

    /// Parent pause before waiting, in milliseconds
    #[clap(long, env = "FORKDEMO_PARENT_DELAY_MS", default_value_t = DEFAULT_PARENT_DELAY.as_millis() as u64)]
    pub parent_delay_ms: u64,

    /// Code the child exits with
    #[clap(long, env = "FORKDEMO_CHILD_EXIT_CODE", default_value_t = DEFAULT_CHILD_EXIT_CODE)]
    pub exit_code: u8,
}

impl Default for ExitStatusArgs {
    fn default() -> Self {
        Self {
            process_listing: DEFAULT_PROCESS_LISTING.to_string(),
            file_listing: DEFAULT_FILE_LISTING.to_string(),
            child_delay_ms: DEFAULT_CHILD_DELAY.as_millis() as u64,
            parent_delay_ms: DEFAULT_PARENT_DELAY.as_millis() as u64,
            exit_code: DEFAULT_CHILD_EXIT_CODE,
        }
    }
}

impl ExitStatusArgs {
    #[instrument(name = "exit_status", skip_all, fields(exit_code = self.exit_code))]
    pub fn run(&self) -> DemoResult<Role> {
        let mut out = io::stdout();

        match fork_process()? {
            Branch::Child => {
                run_unchecked(&ShellCommand::new(self.process_listing.as_str()));
                thread::sleep(Duration::from_millis(self.child_delay_ms));
                run_unchecked(&ShellCommand::new(self.file_listing.as_str()));

                writeln!(out, "Child exiting with code {}", self.exit_code)?;
                out.flush()?;
                Ok(Role::Child {
                    exit_code: self.exit_code,
                })
            }
            Branch::Parent(child) => {
                thread::sleep(Duration::from_millis(self.parent_delay_ms));
                info!(child = child.pid().as_raw(), "Parent waiting for child");
                let outcome = child.wait()?;

                write_outcome(&mut out, &outcome)?;
                out.flush()?;
                Ok(Role::Parent)
            }
        }
    }
}

/// Command failures do not alter the child's course
fn run_unchecked(command: &ShellCommand) {
    if let Err(e) = command.run() {
        warn!(command = command.literal(), error = %e, "Listing command failed");
    }
}

fn write_outcome(out: &mut impl Write, outcome: &WaitOutcome) -> io::Result<()> {
    writeln!(
        out,
        "In parent process: exit status from child is decimal {}, hexa {:x}",
        outcome.raw, outcome.raw
    )?;
    writeln!(out, "Decoded child status: {}", outcome.status)
}
