//! Command-line argument parsing.
//!
//! ```text
//! userdeck [--shortcut favorites|search|export] [DEEP_LINK]
//! userdeck export [--format json|csv|text] [--favorites 3,7] [--only-favorites]
//!                 [--output PATH | --save] [--endpoint URL]
//! userdeck --version | --help
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::error::ParseError;
use crate::export::ExportFormat;

pub const USAGE: &str = "\
Usage:
  userdeck [--shortcut favorites|search|export] [DEEP_LINK]
  userdeck export [OPTIONS]
  userdeck --version | --help

Export options:
  --format <json|csv|text>   output format (default: json)
  --favorites <ids>          comma separated ids to mark as favorite
  --only-favorites           export only the favorite users
  --output <path>            write to a file instead of stdout
  --save                     save under the fixed file name in the download dir
  --endpoint <url>           user list URL

Environment:
  USERDECK_ENDPOINT, USERDECK_TIMEOUT_SECS, USERDECK_DOWNLOAD_DIR, USERDECK_LOG";

/// Startup shortcut, as used by app deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Start with the favorites filter on.
    Favorites,
    /// Start with the search box focused.
    Search,
    /// Start with the export dialog open.
    Export,
}

impl Shortcut {
    /// Read `shortcut=` from a query string or deep link such as
    /// `userdeck://open?shortcut=favorites`. Unknown values are ignored.
    pub fn from_query(link: &str) -> Option<Self> {
        let query = link.split_once('?').map_or(link, |(_, q)| q);
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(key, _)| *key == "shortcut")
            .find_map(|(_, value)| {
                let value = urlencoding::decode(value).ok()?;
                value.parse().ok()
            })
    }
}

impl FromStr for Shortcut {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "favorites" => Ok(Shortcut::Favorites),
            "search" => Ok(Shortcut::Search),
            "export" => Ok(Shortcut::Export),
            _ => Err(ParseError::new("shortcut", s, "favorites, search, export")),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shortcut::Favorites => "favorites",
            Shortcut::Search => "search",
            Shortcut::Export => "export",
        };
        f.write_str(name)
    }
}

/// Where headless export output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportTarget {
    #[default]
    Stdout,
    File(PathBuf),
    /// The configured download directory, under the format's file name.
    DownloadDir,
}

/// Options of the `export` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub favorites: Vec<u64>,
    pub favorites_only: bool,
    pub target: ExportTarget,
    pub endpoint: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Fetch, serialize and write without starting the terminal UI.
    Export(ExportOptions),
    /// Run the TUI application (default)
    RunTui { shortcut: Option<Shortcut> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error(transparent)]
    Value(#[from] ParseError),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("'{0}' is not a valid user id")]
    InvalidId(String),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),

    #[error("--output and --save cannot be combined")]
    ConflictingTargets,
}

/// Parse command-line arguments (including the program name).
///
/// ```
/// use userdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["userdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1).peekable();

    if args.peek().map(String::as_str) == Some("export") {
        args.next();
        return parse_export(args).map(CliCommand::Export);
    }

    let mut shortcut = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--shortcut" => {
                let value = args.next().ok_or(CliError::MissingValue("--shortcut"))?;
                shortcut = Some(value.parse()?);
            }
            link if link.contains("shortcut=") => {
                shortcut = Shortcut::from_query(link).or(shortcut);
            }
            other => return Err(CliError::Unexpected(other.to_string())),
        }
    }
    Ok(CliCommand::RunTui { shortcut })
}

fn parse_export<I>(mut args: I) -> Result<ExportOptions, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = ExportOptions::default();
    let mut save = false;
    let mut output = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" | "-f" => {
                let value = args.next().ok_or(CliError::MissingValue("--format"))?;
                options.format = value.parse()?;
            }
            "--favorites" => {
                let value = args.next().ok_or(CliError::MissingValue("--favorites"))?;
                options.favorites.extend(parse_ids(&value)?);
            }
            "--only-favorites" => options.favorites_only = true,
            "--output" | "-o" => {
                let value = args.next().ok_or(CliError::MissingValue("--output"))?;
                output = Some(value);
            }
            "--save" => save = true,
            "--endpoint" => {
                let value = args.next().ok_or(CliError::MissingValue("--endpoint"))?;
                options.endpoint = Some(value);
            }
            other => return Err(CliError::Unexpected(other.to_string())),
        }
    }

    options.target = match (output, save) {
        (Some(_), true) => return Err(CliError::ConflictingTargets),
        (Some(path), false) if path == "-" => ExportTarget::Stdout,
        (Some(path), false) => ExportTarget::File(PathBuf::from(path)),
        (None, true) => ExportTarget::DownloadDir,
        (None, false) => ExportTarget::Stdout,
    };
    Ok(options)
}

fn parse_ids(value: &str) -> Result<Vec<u64>, CliError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| CliError::InvalidId(s.to_string())))
        .collect()
}
