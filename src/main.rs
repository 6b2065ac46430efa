/*!
 * procdemo - Entry Point
 *
 * Runs one demonstration per invocation:
 * - isolation: private address spaces after fork
 * - exit-status: exit status propagation through wait
 * - copy: copy construction of a value
 */

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use fork_demos::{init_tracing, Demo};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    demo: Demo,
}

fn main() -> miette::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    info!(demo = ?cli.demo, "Starting demo");

    // Both processes of a forking demo return through here
    let role = cli.demo.run()?;
    Ok(ExitCode::from(role.exit_code()))
}
