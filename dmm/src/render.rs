//! Request → command line orchestration shared by `dmm render` and `dmm batch`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CommandKind, CommandSpec, InvalidParameter, RawParam};

/// How rendered lines are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare SCPI line.
    #[default]
    Text,
    /// One JSON object per line: `{"command": ..., "line": ...}`.
    Json,
}

/// Unvalidated request for one command, as read from TOML or the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandRequest {
    pub command: CommandKind,
    #[serde(default)]
    pub range: RawParam,
    #[serde(default)]
    pub resolution: RawParam,
}

/// A successfully rendered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub command: CommandKind,
    pub line: String,
}

impl Rendered {
    pub fn from_spec(spec: &CommandSpec) -> Self {
        Self {
            command: spec.kind(),
            line: spec.render(),
        }
    }

    /// Format for output (no trailing newline).
    pub fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.line.clone()),
            OutputFormat::Json => serde_json::to_string(self).context("serialize rendered command"),
        }
    }
}

/// Validate a request and render its command line.
pub fn render_request(request: &CommandRequest) -> Result<Rendered, InvalidParameter> {
    let spec = CommandSpec::new(request.command, &request.range, &request.resolution)?;
    let rendered = Rendered::from_spec(&spec);
    debug!(command = %request.command, line = %rendered.line, "rendered command");
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::request;

    #[test]
    fn renders_request_to_line() {
        let rendered =
            render_request(&request(CommandKind::MeasureVoltageDc, 10.0, 0.001)).expect("render");
        assert_eq!(
            rendered,
            Rendered {
                command: CommandKind::MeasureVoltageDc,
                line: "MEAS:VOLT:DC? 10.0,0.001".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_default_to_def() {
        let req: CommandRequest =
            toml::from_str("command = \"configure-current-ac\"").expect("toml");
        let rendered = render_request(&req).expect("render");
        assert_eq!(rendered.line, "CONF:CURR:AC");
    }

    #[test]
    fn rejects_invalid_request() {
        let err = render_request(&request(CommandKind::ConfigureCurrentAc, "DEF", "MAX"))
            .expect_err("reject");
        assert!(matches!(err, InvalidParameter::ResolutionWithoutRange { .. }));
    }

    #[test]
    fn json_format_names_command_and_line() {
        let rendered = render_request(&request(CommandKind::ConfigureCurrentAc, "min", "max"))
            .expect("render");
        assert_eq!(
            rendered.format(OutputFormat::Json).expect("json"),
            r#"{"command":"configure-current-ac","line":"CONF:CURR:AC MIN,MAX"}"#
        );
        assert_eq!(
            rendered.format(OutputFormat::Text).expect("text"),
            "CONF:CURR:AC MIN,MAX"
        );
    }
}
