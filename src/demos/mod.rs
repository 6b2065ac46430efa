/*!
 * Demos
 * One subcommand per demonstration program
 */

pub mod copy;
pub mod exit_status;
pub mod isolation;

use clap::Subcommand;

pub use copy::{CopyArgs, Sample};
pub use exit_status::ExitStatusArgs;
pub use isolation::IsolationArgs;

use crate::core::errors::DemoResult;
use crate::core::types::Role;

#[derive(Debug, Clone, Subcommand)]
pub enum Demo {
    /// Child mutates its copy of a value; the parent's copy is untouched
    Isolation(IsolationArgs),
    /// Child exits with a fixed code; the parent prints the raw status word
    ExitStatus(ExitStatusArgs),
    /// Construct one value as a copy of another
    Copy(CopyArgs),
}

impl Demo {
    pub fn run(&self) -> DemoResult<Role> {
        match self {
            Demo::Isolation(args) => args.run(),
            Demo::ExitStatus(args) => args.run(),
            Demo::Copy(args) => args.run(),
        }
    }
}
