//! Test-only helpers for building requests and specs.

use crate::core::{CommandKind, CommandSpec, RawParam};
use crate::render::CommandRequest;

/// Build an unvalidated request from anything convertible to `RawParam`.
pub fn request(
    command: CommandKind,
    range: impl Into<RawParam>,
    resolution: impl Into<RawParam>,
) -> CommandRequest {
    CommandRequest {
        command,
        range: range.into(),
        resolution: resolution.into(),
    }
}

/// Build a spec that is expected to be valid.
pub fn valid_spec(
    command: CommandKind,
    range: impl Into<RawParam>,
    resolution: impl Into<RawParam>,
) -> CommandSpec {
    CommandSpec::new(command, &range.into(), &resolution.into()).expect("valid spec")
}

/// TOML batch file contents with one `[[command]]` table per entry.
pub fn batch_toml(entries: &[(&str, &str, &str)]) -> String {
    entries
        .iter()
        .map(|(command, range, resolution)| {
            format!(
                "[[command]]\ncommand = \"{command}\"\nrange = {range}\nresolution = {resolution}\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
