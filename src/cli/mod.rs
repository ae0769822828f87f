//! CLI entry points.
//!
//! - Argument parsing (with deep-link shortcuts)
//! - Version and help output
//! - Headless export
//!
//! ```ignore
//! use userdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(command.clone(), &config).await {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod export;
pub mod version;

pub use args::{parse_args, CliCommand, CliError, ExportOptions, ExportTarget, Shortcut, USAGE};
pub use export::handle_export_command;
pub use version::{handle_help_command, handle_version_command, VERSION};

use crate::config::DeckConfig;
use crate::error::{DeckError, DeckResult};

/// Exit status for a failed command.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for a failure worth retrying (`EX_TEMPFAIL`).
pub const EXIT_TEMPFAIL: i32 = 75;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`], which the caller handles.
pub async fn run_cli_command(command: CliCommand, config: &DeckConfig) -> Option<DeckResult<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::Export(options) => Some(handle_export_command(options, config).await),
        CliCommand::RunTui { .. } => None,
    }
}

/// Process exit status for `err`.
pub fn exit_code(err: &DeckError) -> i32 {
    if err.is_retryable() {
        EXIT_TEMPFAIL
    } else {
        EXIT_FAILURE
    }
}
