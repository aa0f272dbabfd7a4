//! Pre-flight checks for external tools and the target path.
//!
//! Every subprocess goes through the [`CommandRunner`] port, which enforces
//! a timeout and never fails: a probe result is data, not an error. What
//! *is* an error (and what is merely a warning) is decided here:
//!
//! - a missing package manager blocks generation unless the user explicitly
//!   opts to continue;
//! - missing docker or git only downgrade features, so their checks return
//!   plain status for the CLI to print as warnings.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, ToolProbe},
    },
    domain::PackageManager,
    error::ForgeResult,
};

/// Status of an optional tool check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub available: bool,
    pub message: String,
}

/// Validates external dependencies before generation.
pub struct DependencyValidator<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> DependencyValidator<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Probe an arbitrary tool with `--version`.
    pub fn check_tool(&self, command: &str) -> ToolProbe {
        let probe = self.runner.probe(command, &["--version"]);
        debug!(command, available = probe.available, "tool probe");
        probe
    }

    /// The selected package manager must be installed.
    #[instrument(skip(self))]
    pub fn validate_package_manager(&self, manager: PackageManager) -> ForgeResult<String> {
        let probe = self.check_tool(manager.command());
        if probe.available {
            Ok(probe.output)
        } else {
            Err(ApplicationError::DependencyMissing {
                tool: manager.as_str().into(),
                suggestion: manager.install_url().into(),
            }
            .into())
        }
    }

    /// Two-stage container runtime check: binary first, then the daemon.
    ///
    /// Never an error; container support degrades to a warning.
    pub fn validate_docker(&self) -> ToolStatus {
        let binary = self.check_tool("docker");
        if !binary.available {
            return ToolStatus {
                available: false,
                message: "Docker is not installed".into(),
            };
        }

        let daemon = self.runner.probe("docker", &["ps"]);
        if !daemon.available {
            return ToolStatus {
                available: false,
                message: "Docker is installed but the daemon is not running".into(),
            };
        }

        ToolStatus {
            available: true,
            message: format!("Docker is available: {}", binary.output),
        }
    }

    /// Git availability check. Never an error.
    pub fn validate_git(&self) -> ToolStatus {
        let probe = self.check_tool("git");
        if probe.available {
            ToolStatus {
                available: true,
                message: probe.output,
            }
        } else {
            ToolStatus {
                available: false,
                message: "Git is not installed".into(),
            }
        }
    }
}

/// The target path must not exist at all, whether file or directory.
pub fn ensure_target_available(fs: &dyn Filesystem, path: &Path) -> ForgeResult<()> {
    if fs.exists(path) {
        return Err(ApplicationError::ProjectExists {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
