//! Scaffold service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Refuse a target path that already exists
//! 2. Run every registered generator in order (project tree first)
//! 3. Run post-generation steps, collecting warnings
//!
//! Generation failures are fatal and leave any partial output in place;
//! there is no rollback. Post-generation failures (git init, dependency
//! install) never fail the run; they come back as [`PostGenWarning`]s for
//! the CLI to print.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{CommandRunner, Filesystem},
        services::preflight::ensure_target_available,
    },
    domain::ProjectConfig,
    error::ForgeResult,
};

/// A single file-tree producer. Implementations live in the adapters crate;
/// conditional generators are silent no-ops when their feature is off.
pub trait Generator: Send + Sync {
    /// Short name used in logs and progress output.
    fn name(&self) -> &'static str;

    /// Write this generator's slice of the project under `target`.
    fn generate(
        &self,
        config: &ProjectConfig,
        target: &Path,
        fs: &dyn Filesystem,
    ) -> ForgeResult<()>;
}

/// Warning from a post-generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostGenWarning {
    pub step: String,
    pub detail: String,
}

/// Options for the post-generation phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostGenOptions {
    /// Skip the dependency-install step (`--skip-install`).
    pub skip_install: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    generators: Vec<Box<dyn Generator>>,
}

impl ScaffoldService {
    /// Create a service from an ordered generator list. The project-tree
    /// generator must come first; everything after it writes into the tree
    /// it created.
    pub fn new(generators: Vec<Box<dyn Generator>>) -> Self {
        Self { generators }
    }

    /// Generate a complete project at `target`.
    #[instrument(skip_all, fields(project = %config.name(), target = %target.display()))]
    pub fn scaffold(
        &self,
        config: &ProjectConfig,
        target: &Path,
        fs: &dyn Filesystem,
    ) -> ForgeResult<()> {
        // Checked here as well as in the CLI so the invariant holds no
        // matter how the service is driven.
        ensure_target_available(fs, target)?;

        for generator in &self.generators {
            info!(generator = generator.name(), "running generator");
            generator.generate(config, target, fs)?;
        }

        info!("generation completed");
        Ok(())
    }

    /// Run the post-generation steps. Every failure becomes a warning.
    #[instrument(skip_all)]
    pub fn post_generate(
        &self,
        config: &ProjectConfig,
        target: &Path,
        runner: &dyn CommandRunner,
        options: PostGenOptions,
    ) -> Vec<PostGenWarning> {
        let mut warnings = Vec::new();

        if config.use_git() {
            if let Err(detail) = runner.run("git", &["init"], target) {
                warn!(detail = %detail, "git init failed");
                warnings.push(PostGenWarning {
                    step: "git init".into(),
                    detail,
                });
            }
        }

        if !options.skip_install {
            let manager = config.package_manager();
            if let Err(detail) = runner.run(manager.command(), manager.install_args(), target) {
                warn!(manager = manager.as_str(), detail = %detail, "dependency install failed");
                warnings.push(PostGenWarning {
                    step: format!("{} {}", manager.command(), manager.install_args().join(" ")),
                    detail,
                });
            }
        }

        warnings
    }
}

/// Create `.env` from the generated `.env.example`, unless `.env` already
/// exists. Missing `.env.example` is a no-op.
pub fn ensure_env_file(fs: &dyn Filesystem, target: &Path) -> ForgeResult<()> {
    let example = target.join(".env.example");
    let env = target.join(".env");

    if !fs.exists(&example) || fs.exists(&env) {
        return Ok(());
    }

    let content = fs.read_to_string(&example)?;
    fs.write_file(&env, &content)
}
