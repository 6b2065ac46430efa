/*!
 * Demo Limits and Constants
 *
 * Default values for every tunable of the demonstrations.
 * The CLI and environment variables override these at startup.
 */

use std::time::Duration;

// =============================================================================
// ADDRESS-SPACE ISOLATION
// =============================================================================

/// Value held by the creating process before duplication
pub const DEFAULT_INITIAL_VALUE: i32 = 10;

/// Amount the child adds to its private copy
pub const DEFAULT_INCREMENT: i32 = 10;

// =============================================================================
// EXIT-STATUS PROPAGATION
// =============================================================================

/// Exit code the child terminates with
pub const DEFAULT_CHILD_EXIT_CODE: u8 = 5;

/// Delay between the child's two listing commands (10s)
pub const DEFAULT_CHILD_DELAY: Duration = Duration::from_secs(10);

/// Delay before the parent calls wait (3s)
/// Shorter than the child's work so the parent usually blocks in wait
pub const DEFAULT_PARENT_DELAY: Duration = Duration::from_secs(3);

/// Process-listing command run first by the child
pub const DEFAULT_PROCESS_LISTING: &str = "ps -ef";

/// File-listing command run after the delay
pub const DEFAULT_FILE_LISTING: &str = "ls -lrt --block-size=M";

// =============================================================================
// SHELL
// =============================================================================

/// Shell used to interpret command literals
/// [LINUX-COMPAT] Same interpreter system(3) uses
pub const SHELL_PATH: &str = "/bin/sh";
