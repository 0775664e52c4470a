//! Command-line option parsing for the `torus-life` driver.

use std::path::PathBuf;

use thiserror::Error;

/// Options for a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub width: f64,
    pub height: f64,
    pub per_type: usize,
    pub ticks: u64,
    pub seed: u64,
    /// Print progress every N ticks; 0 disables progress lines.
    pub report_every: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            width: 600.0,
            height: 400.0,
            per_type: 50,
            ticks: 1000,
            seed: 42,
            report_every: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },
}

/// Parse the arguments that follow the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "--config" => {
                options.config_path = Some(PathBuf::from(next_value(&mut iter, "--config")?));
            }
            "--width" => options.width = parse_value(&mut iter, "--width")?,
            "--height" => options.height = parse_value(&mut iter, "--height")?,
            "--per-type" => options.per_type = parse_value(&mut iter, "--per-type")?,
            "--ticks" => options.ticks = parse_value(&mut iter, "--ticks")?,
            "--seed" => options.seed = parse_value(&mut iter, "--seed")?,
            "--report-every" => options.report_every = parse_value(&mut iter, "--report-every")?,
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }

    for (flag, value) in [("--width", options.width), ("--height", options.height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(CliError::InvalidValue {
                flag,
                value: value.to_string(),
            });
        }
    }
    Ok(Command::Run(options))
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &'static str,
) -> Result<&'a String, CliError> {
    iter.next().ok_or(CliError::MissingValue(flag))
}

fn parse_value<'a, T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &'static str,
) -> Result<T, CliError> {
    let raw = next_value(iter, flag)?;
    raw.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: raw.clone(),
    })
}
