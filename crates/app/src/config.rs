use std::fmt;
use std::time::Duration;

use services::DEFAULT_CACHE_LIFETIME_SECS;
use storage::RemoteConfig;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidCacheSecs { raw: String },
    InvalidTimeoutSecs { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidCacheSecs { raw } => write!(f, "invalid cache lifetime: {raw}"),
            ArgsError::InvalidTimeoutSecs { raw } => write!(f, "invalid http timeout: {raw}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid api url: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ui,
    Catalog,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "catalog" => Some(Self::Catalog),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Runtime settings: environment first, then command-line flags on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub remote: RemoteConfig,
    pub offline: bool,
    pub cache_secs: i64,
    pub verbose: bool,
}

impl Settings {
    /// Defaults overlaid with whatever `lookup` returns for the
    /// `GATEWAY_*` variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let mut remote = RemoteConfig::default();
        if let Some(url) = lookup("GATEWAY_API_URL").filter(|url| !url.trim().is_empty()) {
            remote.base_url = url;
        }
        if let Some(raw) = lookup("GATEWAY_HTTP_TIMEOUT_SECS") {
            remote.timeout = parse_timeout_secs(raw)?;
        }

        let cache_secs = match lookup("GATEWAY_CACHE_SECS") {
            Some(raw) => parse_cache_secs(raw)?,
            None => DEFAULT_CACHE_LIFETIME_SECS,
        };
        let offline = lookup("GATEWAY_OFFLINE").is_some_and(|raw| is_truthy(&raw));

        Ok(Self {
            remote,
            offline,
            cache_secs,
            verbose: false,
        })
    }

    pub fn from_env() -> Result<Self, ArgsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn apply_flags(&mut self, args: &mut impl Iterator<Item = String>) -> Result<(), ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    self.remote.base_url = value;
                }
                "--cache-secs" => {
                    let value = require_value(args, "--cache-secs")?;
                    self.cache_secs = parse_cache_secs(value)?;
                }
                "--offline" => self.offline = true,
                "--verbose" | "-v" => self.verbose = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(())
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

/// Non-negative seconds that also fit a `chrono::TimeDelta`.
fn parse_cache_secs(raw: String) -> Result<i64, ArgsError> {
    match raw.trim().parse::<i64>() {
        Ok(secs) if secs >= 0 && chrono::TimeDelta::try_seconds(secs).is_some() => Ok(secs),
        _ => Err(ArgsError::InvalidCacheSecs { raw }),
    }
}

fn parse_timeout_secs(raw: String) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ArgsError::InvalidTimeoutSecs { raw }),
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Split argv into the subcommand and the remaining flags.
///
/// No subcommand (or a leading flag) means `ui`.
pub fn parse_command(argv: Vec<String>) -> Result<(Command, Vec<String>), ArgsError> {
    let mut argv = argv;
    let cmd = match argv.first().map(String::as_str) {
        None => return Ok((Command::Ui, argv)),
        Some("--help" | "-h") => Command::Help,
        Some(first) if first.starts_with('-') => return Ok((Command::Ui, argv)),
        Some(first) => Command::from_arg(first)
            .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?,
    };
    argv.remove(0);
    Ok((cmd, argv))
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui] [--api-url <url>] [--offline] [--cache-secs <n>] [--verbose]");
    eprintln!("  app catalog");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --api-url http://localhost:5000");
    eprintln!("  --cache-secs {DEFAULT_CACHE_LIFETIME_SECS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GATEWAY_API_URL, GATEWAY_CACHE_SECS, GATEWAY_HTTP_TIMEOUT_SECS,");
    eprintln!("  GATEWAY_OFFLINE, GATEWAY_LOG (or RUST_LOG)");
}
