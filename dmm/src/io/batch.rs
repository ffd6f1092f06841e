//! Batch request files: a TOML list of `[[command]]` tables.
//!
//! ```toml
//! [[command]]
//! command = "measure-voltage-dc"
//! range = 10.0
//! resolution = 0.001
//!
//! [[command]]
//! command = "configure-current-ac"
//! range = "min"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::InvalidParameter;
use crate::render::{CommandRequest, Rendered, render_request};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Batch {
    #[serde(default, rename = "command")]
    pub commands: Vec<CommandRequest>,
}

/// Outcome of one batch entry. `index` is 1-based, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEntry {
    Ok { index: usize, rendered: Rendered },
    Invalid { index: usize, error: InvalidParameter },
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Read and parse a batch file.
pub fn load_batch(path: &Path) -> Result<Batch> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let batch: Batch =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), entries = batch.commands.len(), "batch loaded");
    Ok(batch)
}

/// Render every entry independently; a rejected entry does not stop the rest.
pub fn render_batch(batch: &Batch) -> Vec<BatchEntry> {
    batch
        .commands
        .iter()
        .enumerate()
        .map(|(idx, request)| {
            let index = idx + 1;
            match render_request(request) {
                Ok(rendered) => BatchEntry::Ok { index, rendered },
                Err(error) => {
                    warn!(index, %error, "batch entry rejected");
                    BatchEntry::Invalid { index, error }
                }
            }
        })
        .collect()
}
