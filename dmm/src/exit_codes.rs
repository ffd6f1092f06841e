//! Stable exit codes for `dmm` CLI commands.

/// Command succeeded (every line rendered).
pub const OK: i32 = 0;
/// I/O, config, or command-line syntax failure.
pub const ERROR: i32 = 1;
/// A parameter was rejected by validation (including any failed batch entry).
pub const INVALID_PARAMETER: i32 = 2;
