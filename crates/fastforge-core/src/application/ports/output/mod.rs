//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fastforge-adapters` crate provides implementations.

use crate::error::ForgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fastforge_adapters::filesystem::LocalFilesystem` (production)
/// - `fastforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, overwriting any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}

/// Result of probing an external tool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolProbe {
    /// Whether the tool ran and exited successfully.
    pub available: bool,
    /// Trimmed stdout of the probe (usually a version string).
    pub output: String,
}

impl ToolProbe {
    pub fn available(output: impl Into<String>) -> Self {
        Self {
            available: true,
            output: output.into(),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Port for running external commands.
///
/// Implemented by `fastforge_adapters::process::SystemRunner` (production)
/// and mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Probe a tool by running it with the given arguments.
    ///
    /// Contract: this call never fails and never blocks indefinitely.
    /// Implementations enforce a timeout; a missing binary, a non-zero
    /// exit, or a timeout all yield an unavailable probe.
    fn probe<'a>(&self, command: &str, args: &[&'a str]) -> ToolProbe;

    /// Run a command to completion in `cwd` with captured output.
    ///
    /// Returns the combined failure detail (exit status + stderr) on error.
    fn run<'a>(&self, command: &str, args: &[&'a str], cwd: &Path) -> Result<(), String>;
}
