//! Multimeter command specs and their SCPI rendering.
//!
//! Supported instructions (Keysight 34401A):
//! - `MEAS:VOLT:DC? [range[,resolution]]` (query)
//! - `CONF:CURR:AC [range[,resolution]]` (configuration)
//!
//! Both share one validator: each field must be a positive number or
//! `MIN`/`MAX`/`DEF`, and a non-default resolution needs a non-default range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{InvalidParameter, UnknownCommand};
use crate::core::param::{Field, ParamValue, RawParam, validate};

/// Supported instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    /// `MEASure:VOLTage:DC?`
    MeasureVoltageDc,
    /// `CONFigure:CURRent:AC`
    ConfigureCurrentAc,
}

impl CommandKind {
    pub const ALL: [CommandKind; 2] = [
        CommandKind::MeasureVoltageDc,
        CommandKind::ConfigureCurrentAc,
    ];

    /// Literal SCPI header, including the query mark for queries.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::MeasureVoltageDc => "MEAS:VOLT:DC?",
            Self::ConfigureCurrentAc => "CONF:CURR:AC",
        }
    }

    pub fn is_query(self) -> bool {
        match self {
            Self::MeasureVoltageDc => true,
            Self::ConfigureCurrentAc => false,
        }
    }

    /// Stable name used on the command line and in TOML files.
    pub fn name(self) -> &'static str {
        match self {
            Self::MeasureVoltageDc => "measure-voltage-dc",
            Self::ConfigureCurrentAc => "configure-current-ac",
        }
    }

    /// Match a SCPI header case-insensitively.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.prefix().eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the kebab-case name or the SCPI header.
impl FromStr for CommandKind {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .or_else(|| Self::from_prefix(s))
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// A validated, immutable command ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    kind: CommandKind,
    range: ParamValue,
    resolution: ParamValue,
}

impl CommandSpec {
    /// Validate both fields, then the cross-field rule, and build the spec.
    ///
    /// Field errors win over the cross-field error, and `range` is checked
    /// before `resolution`.
    pub fn new(
        kind: CommandKind,
        range: &RawParam,
        resolution: &RawParam,
    ) -> Result<Self, InvalidParameter> {
        let range = validate(range, Field::Range)?;
        let resolution = validate(resolution, Field::Resolution)?;
        if range.is_default() && !resolution.is_default() {
            return Err(InvalidParameter::ResolutionWithoutRange {
                resolution: resolution.to_string(),
            });
        }
        Ok(Self {
            kind,
            range,
            resolution,
        })
    }

    /// The bare command with both fields left at `DEF`.
    pub fn defaults(kind: CommandKind) -> Self {
        Self {
            kind,
            range: ParamValue::DEFAULT,
            resolution: ParamValue::DEFAULT,
        }
    }

    pub fn measure_voltage_dc(
        range: impl Into<RawParam>,
        resolution: impl Into<RawParam>,
    ) -> Result<Self, InvalidParameter> {
        Self::new(CommandKind::MeasureVoltageDc, &range.into(), &resolution.into())
    }

    pub fn configure_current_ac(
        range: impl Into<RawParam>,
        resolution: impl Into<RawParam>,
    ) -> Result<Self, InvalidParameter> {
        Self::new(CommandKind::ConfigureCurrentAc, &range.into(), &resolution.into())
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn range(&self) -> ParamValue {
        self.range
    }

    pub fn resolution(&self) -> ParamValue {
        self.resolution
    }

    /// Render the SCPI line (no terminator).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// `PREFIX` when both fields are `DEF`, otherwise `PREFIX a[,b]` with the
/// non-default fields in range, resolution order.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.prefix())?;
        let mut args = [self.range, self.resolution]
            .into_iter()
            .filter(|value| !value.is_default());
        if let Some(first) = args.next() {
            write!(f, " {first}")?;
            for arg in args {
                write!(f, ",{arg}")?;
            }
        }
        Ok(())
    }
}
