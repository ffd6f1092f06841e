//! Tool configuration read from `dmm.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::{CommandKind, CommandSpec, RawParam};
use crate::render::OutputFormat;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "dmm.toml";

/// `dmm` configuration (TOML).
///
/// Every field is optional; a missing file is the same as an empty one.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct DmmConfig {
    /// Output format when `--format` is not given.
    pub format: OutputFormat,

    pub defaults: Defaults,
}

/// Values `dmm render` falls back to when arguments are omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub command: CommandKind,
    pub range: RawParam,
    pub resolution: RawParam,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            command: CommandKind::MeasureVoltageDc,
            range: RawParam::default(),
            resolution: RawParam::default(),
        }
    }
}

impl DmmConfig {
    /// Reject defaults the instrument would not accept.
    ///
    /// Reported as a config error, not as an `InvalidParameter`.
    pub fn validate(&self) -> Result<()> {
        let defaults = &self.defaults;
        CommandSpec::new(defaults.command, &defaults.range, &defaults.resolution)
            .map_err(|err| anyhow!("invalid [defaults]: {err}"))?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DmmConfig::default()`.
pub fn load_config(path: &Path) -> Result<DmmConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(DmmConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DmmConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}
