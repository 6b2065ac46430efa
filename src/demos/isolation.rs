/*!
 * Address-Space Isolation
 *
 * One integer lives on the stack of the creating process and is reached
 * through a local reference. After the fork the child bumps it through that
 * reference; the parent, once the child is gone, still reads the original
 * value at the very same virtual address.
 */

use std::io::{self, Write};

use clap::Args;
use nix::unistd::getpid;
use tracing::{debug, instrument};

use crate::core::errors::DemoResult;
use crate::core::limits::{DEFAULT_INCREMENT, DEFAULT_INITIAL_VALUE};
use crate::core::types::{Role, Stage};
use crate::process::{fork_process, Branch};

#[derive(Debug, Clone, Args)]
pub struct IsolationArgs {
    /// Value stored before the fork
    #[clap(
        long,
        env = "FORKDEMO_INITIAL_VALUE",
        default_value_t = DEFAULT_INITIAL_VALUE,
        allow_hyphen_values = true
    )]
    pub initial_value: i32,

    /// Amount the child adds to its copy
    #[clap(
        long,
        env = "FORKDEMO_INCREMENT",
        default_value_t = DEFAULT_INCREMENT,
        allow_hyphen_values = true
    )]
    pub increment: i32,
}

impl Default for IsolationArgs {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_INITIAL_VALUE,
            increment: DEFAULT_INCREMENT,
        }
    }
}

impl IsolationArgs {
    #[instrument(name = "isolation", skip_all, fields(initial_value = self.initial_value, increment = self.increment))]
    pub fn run(&self) -> DemoResult<Role> {
        let mut out = io::stdout();
        let mut value = self.initial_value;

        writeln!(out, "Address of value = {:p}", &value)?;
        report_stage(&mut out, Stage::BeforeFork)?;

        let p = &mut value;

        let role = match fork_process()? {
            Branch::Child => {
                report_stage(&mut out, Stage::Child)?;
                writeln!(out, "Child sees address {:p}", p)?;
                writeln!(out, "Child initial value = {}", *p)?;
                *p = p.wrapping_add(self.increment);
                debug!(value = *p, "Child incremented its copy");
                writeln!(out, "Child value after increment = {}", *p)?;
                writeln!(out, "Child sees address {:p}", p)?;
                writeln!(out, "Child terminated")?;
                Role::Child { exit_code: 0 }
            }
            Branch::Parent(child) => {
                report_stage(&mut out, Stage::Parent)?;
                // The status is of no interest here, only that the child is gone
                child.wait()?;
                writeln!(out, "Parent value = {}", *p)?;
                writeln!(out, "Parent sees address {:p}", p)?;
                Role::Parent
            }
        };

        report_stage(&mut out, Stage::Exit)?;
        out.flush()?;
        Ok(role)
    }
}

fn report_stage(out: &mut impl Write, stage: Stage) -> io::Result<()> {
    writeln!(out, "PID = {} stage = [{}]", getpid(), stage)
}
