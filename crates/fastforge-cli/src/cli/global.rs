//! Flags shared by every subcommand.
//!
//! [`GlobalArgs`] is flattened into [`super::Cli`] with `global = true` on
//! each field, so `fastforge init my_api -vv` and `fastforge -vv init
//! my_api` both parse.

use clap::Args;
use std::path::PathBuf;

/// Flags accepted anywhere on the command line.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Verbosity counter, mapped to a tracing level in `logging.rs`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More detailed logging (repeat: -v, -vv, -vvv)",
        long_help = "Raise the logging level:
    (none)  - warnings only
    -v      - info (progress messages)
    -vv     - debug (diagnostics)
    -vvv    - trace (everything)"
    )]
    pub verbose: u8,

    /// Errors only; mutually exclusive with `-v`.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Strip ANSI codes from all output.
    ///
    /// Also triggered by the `NO_COLOR` environment variable
    /// (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI color codes"
    )]
    pub no_color: bool,

    /// Explicit config file; overrides the platform default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// Rendering mode for command output.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output rendering: auto, human, plain, or json"
    )]
    pub output_format: OutputFormat,
}

/// Rendering modes for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pick human or plain depending on whether stdout is a terminal.
    #[default]
    Auto,
    /// Colored, glyph-decorated messages.
    Human,
    /// The same messages without ANSI codes.
    Plain,
    /// One JSON object per line, for scripting.
    Json,
}
