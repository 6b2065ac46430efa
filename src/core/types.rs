/*!
 * Core Types
 * Common types used across the demos
 */

use std::fmt;

/// OS process identifier
pub use nix::unistd::Pid;

/// Point in a demo's execution reported on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    BeforeFork,
    Child,
    Parent,
    Exit,
}

impl Stage {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stage::BeforeFork => "before-fork",
            Stage::Child => "child",
            Stage::Parent => "parent",
            Stage::Exit => "exit",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a duplication a demo finished on
///
/// The binary turns this into its own exit code, so the child leaves through
/// `main` like any other process instead of calling `exit` mid-stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// No duplication happened (single-process demos)
    Sole,
    Parent,
    Child { exit_code: u8 },
}

impl Role {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Role::Child { exit_code } => *exit_code,
            Role::Sole | Role::Parent => 0,
        }
    }
}
