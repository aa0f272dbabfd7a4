//! `fastforge version`: print the tool name and version.

use crate::error::CliResult;

/// Always writes to stdout, even under `--quiet`; version output is the
/// whole point of the command.
pub fn execute() -> CliResult<()> {
    println!("fastforge {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
