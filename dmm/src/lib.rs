//! SCPI command builder for a Keysight 34401A digital multimeter.
//!
//! Turns a pair of measurement parameters (`range`, `resolution`) into an
//! instrument command line such as `MEAS:VOLT:DC? 10.0,0.001`. Nothing here
//! talks to an instrument; the rendered line is handed to whatever transport
//! the caller uses.
//!
//! - **[`core`]**: Pure validation, construction, rendering, and parsing.
//!   No I/O, no logging.
//! - **[`io`]**: TOML configuration and batch files.
//!
//! [`render`] connects requests to output lines for the `dmm` binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
