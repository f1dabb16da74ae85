//! Command-line configuration.
//!
//! ```text
//! schedsim [OPTIONS] <FILE>
//! schedsim [OPTIONS] --random <COUNT> [--seed <SEED>]
//! ```

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::models::Tick;
use crate::report::OutputFormat;
use crate::scheduler::{Algorithm, RoundRobin};

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: schedsim [OPTIONS] <FILE>
       schedsim [OPTIONS] --random <COUNT> [--seed <SEED>]

Simulates FCFS, SJF, priority (shortest remaining time) and round-robin
CPU scheduling over the processes in FILE (id,burst,arrival[,priority]).

Options:
  -a, --algorithms <LIST>  comma-separated subset of fcfs,sjf,priority,rr
  -q, --quantum <TICKS>    round-robin time quantum [default: 1]
  -f, --format <FORMAT>    text or json [default: text]
      --random <COUNT>     simulate a generated workload instead of a file
      --seed <SEED>        seed for --random [default: 0]
  -h, --help               print this help

Environment:
  RUST_LOG                 log filter, e.g. schedsim=debug [default: warn]
  SCHEDSIM_TRACE_JSON      emit logs as JSON when set to 1 or true
";

/// Where the processes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A process file.
    File(PathBuf),
    /// A generated workload.
    Random { count: usize, seed: u64 },
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage and exit.
    Help,
    /// Run the simulation.
    Run(Config),
}

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Process source.
    pub input: InputSource,
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Round-robin quantum.
    pub quantum: Tick,
    /// Output format.
    pub format: OutputFormat,
}

impl Config {
    /// Creates a configuration with defaults for everything but the input.
    pub fn new(input: InputSource) -> Self {
        Self {
            input,
            algorithms: Algorithm::ALL.to_vec(),
            quantum: RoundRobin::DEFAULT_QUANTUM,
            format: OutputFormat::Text,
        }
    }

    /// Parses command-line arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut file: Option<PathBuf> = None;
        let mut random: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut algorithms = None;
        let mut quantum = RoundRobin::DEFAULT_QUANTUM;
        let mut format = OutputFormat::Text;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-a" | "--algorithms" => {
                    let value = require_value(&arg, args.next())?;
                    algorithms = Some(parse_algorithms(&arg, &value)?);
                }
                "-q" | "--quantum" => {
                    let value = require_value(&arg, args.next())?;
                    quantum = parse_number(&arg, &value)?;
                    if quantum == 0 {
                        return Err(invalid(&arg, &value, "must be at least 1"));
                    }
                }
                "-f" | "--format" => {
                    let value = require_value(&arg, args.next())?;
                    format = value
                        .parse()
                        .map_err(|reason: String| invalid(&arg, &value, &reason))?;
                }
                "--random" => {
                    let value = require_value(&arg, args.next())?;
                    random = Some(parse_number(&arg, &value)?);
                }
                "--seed" => {
                    let value = require_value(&arg, args.next())?;
                    seed = Some(parse_number(&arg, &value)?);
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownOption(arg));
                }
                _ if file.is_some() => return Err(ConfigError::UnexpectedArgument(arg)),
                _ => file = Some(PathBuf::from(arg)),
            }
        }

        let input = match (file, random) {
            (Some(path), None) => InputSource::File(path),
            (None, Some(count)) => InputSource::Random {
                count,
                seed: seed.unwrap_or(0),
            },
            (Some(path), Some(_)) => {
                return Err(ConfigError::UnexpectedArgument(path.display().to_string()))
            }
            (None, None) => return Err(ConfigError::MissingInput),
        };

        let mut config = Config::new(input);
        if let Some(algorithms) = algorithms {
            config.algorithms = algorithms;
        }
        config.quantum = quantum;
        config.format = format;
        Ok(Command::Run(config))
    }
}

fn require_value(option: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(option.to_string()))
}

fn parse_number<T: std::str::FromStr>(option: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| invalid(option, value, &e.to_string()))
}

fn parse_algorithms(option: &str, value: &str) -> Result<Vec<Algorithm>, ConfigError> {
    let mut algorithms = Vec::new();
    for name in value.split(',').filter(|s| !s.trim().is_empty()) {
        let algorithm: Algorithm = name
            .parse()
            .map_err(|reason: String| invalid(option, value, &reason))?;
        if !algorithms.contains(&algorithm) {
            algorithms.push(algorithm);
        }
    }
    if algorithms.is_empty() {
        return Err(invalid(option, value, "no algorithms given"));
    }
    Ok(algorithms)
}

fn invalid(option: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
