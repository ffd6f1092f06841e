//! `dmm`: build SCPI command lines for a Keysight 34401A multimeter.
//!
//! Prints rendered lines on stdout; nothing is sent to an instrument.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use dmm::core::{CommandKind, CommandSpec, InvalidParameter, ParseError, RawParam, parse_line};
use dmm::exit_codes;
use dmm::io::batch::{BatchEntry, load_batch, render_batch};
use dmm::io::config::{CONFIG_FILE, DmmConfig, load_config};
use dmm::logging;
use dmm::render::{CommandRequest, OutputFormat, Rendered, render_request};

#[derive(Parser)]
#[command(
    name = "dmm",
    version,
    about = "SCPI command builder for a digital multimeter"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate parameters and print the command line.
    Render {
        /// `measure-voltage-dc`, `configure-current-ac`, or the SCPI header.
        /// Falls back to `[defaults] command` from the config.
        command: Option<CommandKind>,
        /// Positive number or MIN/MAX/DEF.
        #[arg(long, allow_hyphen_values = true)]
        range: Option<String>,
        /// Positive number or MIN/MAX/DEF. Requires a non-DEF range.
        #[arg(long, allow_hyphen_values = true)]
        resolution: Option<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Parse a command line and print its normalized form.
    Check {
        line: String,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Render every `[[command]]` entry of a TOML batch file.
    Batch {
        path: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the built-in demonstration commands.
    Demo,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    match cli.command {
        Command::Render {
            command,
            range,
            resolution,
            format,
        } => {
            let request = build_request(&config, command, range.as_deref(), resolution.as_deref());
            cmd_render(&request, format.unwrap_or(config.format))
        }
        Command::Check { line, format } => cmd_check(&line, format.unwrap_or(config.format)),
        Command::Batch { path, format } => cmd_batch(&path, format.unwrap_or(config.format)),
        Command::Demo => cmd_demo(),
    }
}

/// Fill omitted CLI arguments from `[defaults]`.
fn build_request(
    config: &DmmConfig,
    command: Option<CommandKind>,
    range: Option<&str>,
    resolution: Option<&str>,
) -> CommandRequest {
    let defaults = &config.defaults;
    CommandRequest {
        command: command.unwrap_or(defaults.command),
        range: range.map_or_else(|| defaults.range.clone(), RawParam::from_token),
        resolution: resolution.map_or_else(|| defaults.resolution.clone(), RawParam::from_token),
    }
}

fn cmd_render(request: &CommandRequest, format: OutputFormat) -> Result<i32> {
    let rendered = render_request(request)
        .with_context(|| format!("render {}", request.command))?;
    println!("{}", rendered.format(format)?);
    Ok(exit_codes::OK)
}

fn cmd_check(line: &str, format: OutputFormat) -> Result<i32> {
    let spec = parse_line(line).with_context(|| format!("check {line:?}"))?;
    debug!(command = %spec.kind(), "command line parsed");
    println!("{}", Rendered::from_spec(&spec).format(format)?);
    Ok(exit_codes::OK)
}

fn cmd_batch(path: &Path, format: OutputFormat) -> Result<i32> {
    let batch = load_batch(path)?;
    let entries = render_batch(&batch);
    let mut failed = 0usize;
    for entry in &entries {
        match entry {
            BatchEntry::Ok { rendered, .. } => println!("{}", rendered.format(format)?),
            BatchEntry::Invalid { index, error } => {
                failed += 1;
                eprintln!("entry {index}: {error}");
            }
        }
    }
    info!(total = entries.len(), failed, "batch rendered");
    if failed > 0 {
        return Ok(exit_codes::INVALID_PARAMETER);
    }
    Ok(exit_codes::OK)
}

fn cmd_demo() -> Result<i32> {
    let measure = CommandSpec::measure_voltage_dc(10.0, 0.001)?;
    println!("{}: {}", measure.kind(), measure);

    let configure = CommandSpec::configure_current_ac("min", "max")?;
    println!("{}: {}", configure.kind(), configure);

    match CommandSpec::measure_voltage_dc("DEF", 0.001) {
        Ok(spec) => println!("{}: {}", spec.kind(), spec),
        Err(err) => println!("rejected: {err}"),
    }
    Ok(exit_codes::OK)
}

/// Validation failures get their own exit code; everything else is `ERROR`.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<InvalidParameter>().is_some() {
        return exit_codes::INVALID_PARAMETER;
    }
    if let Some(ParseError::Invalid(_)) = err.downcast_ref::<ParseError>() {
        return exit_codes::INVALID_PARAMETER;
    }
    exit_codes::ERROR
}
