//! Command-line argument parsing for the marsview binary.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Load and print listings, optionally from a different API base URL
    Run { base_url: Option<String> },
}

/// Argument errors.
#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    Unknown(String),
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
usage: marsview [--url <base-url>] [--version] [--help]

  --url <base-url>  listing API base URL (overrides MARSVIEW_API_URL)
  -V, --version     print version
  -h, --help        print this help";

/// Parse arguments, skipping the program name.
///
/// # Examples
///
/// ```
/// use marsview::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["marsview".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut base_url = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue("--url".to_string()))?;
                base_url = Some(value);
            }
            other => match other.strip_prefix("--url=") {
                Some(value) if !value.is_empty() => base_url = Some(value.to_string()),
                Some(_) => return Err(ArgsError::MissingValue("--url".to_string())),
                None => return Err(ArgsError::Unknown(other.to_string())),
            },
        }
    }

    Ok(CliCommand::Run { base_url })
}
