/*!
 * Copy Construction
 * A value built field by field from another value; the two share nothing.
 */

use std::io::{self, Write};

use clap::Args;

use crate::core::errors::DemoResult;
use crate::core::types::Role;

#[derive(Debug, PartialEq, Eq)]
pub struct Sample {
    pub a: i32,
    pub b: i32,
}

impl Sample {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "a = {}", self.a)?;
        writeln!(out, "b = {}", self.b)
    }
}

impl Clone for Sample {
    fn clone(&self) -> Self {
        Self {
            a: self.a,
            b: self.b,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    #[clap(long, default_value_t = 10, allow_hyphen_values = true)]
    pub a: i32,

    #[clap(long, default_value_t = 20, allow_hyphen_values = true)]
    pub b: i32,
}

impl CopyArgs {
    pub fn run(&self) -> DemoResult<Role> {
        let mut out = io::stdout().lock();

        let s1 = Sample::new(self.a, self.b);
        let s2 = s1.clone();
        s1.print(&mut out)?;
        s2.print(&mut out)?;

        Ok(Role::Sole)
    }
}
