//! Exit code constants for the licensegen CLI.
//!
//! - 0: Success
//! - 1: Failure (git identity unavailable, prompt failure, bad arguments, write failure)
//! - 2: Internal catalog mismatch (a license was offered that has no bundled template)
//! - 130: Interrupted by the user (mirrors the shell convention for SIGINT)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Generic failure: identity lookup, prompt I/O, bad arguments, or output write.
pub const FAILURE: i32 = 1;

/// The catalog offered a license that the template store cannot resolve.
pub const INTERNAL_ERROR: i32 = 2;

/// The user cancelled a prompt.
pub const INTERRUPTED: i32 = 130;
