//! `fastforge init`: scaffold a new FastAPI project.
//!
//! Responsibility: collect a [`ProjectConfig`] (interactively or from
//! defaults), run the pre-flight checks, and drive the core scaffold
//! service. All generation logic lives in the core and adapter crates.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{info, instrument};

use fastforge_adapters::{LocalFilesystem, SystemRunner, default_generators};
use fastforge_core::{
    application::{
        DependencyValidator, PostGenOptions, ScaffoldService, ensure_target_available,
    },
    domain::{NameValidator, PackageManager, ProjectConfig, ProjectConfigBuilder},
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `fastforge init` command.
///
/// Dispatch sequence:
/// 1. Collect the project configuration (`--yes` defaults, sequential
///    prompts, or the `--wizard` paged flow)
/// 2. Refuse an existing target directory before writing anything
/// 3. Run the generator pipeline
/// 4. Run post-generation steps; print their failures as warnings
/// 5. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let runner = SystemRunner::new();
    let deps = DependencyValidator::new(&runner);

    let draft = seeded_draft(&config);
    let project = if args.yes {
        // clap guarantees the name is present in --yes mode.
        let name = args.name.as_deref().unwrap_or_default();
        build_noninteractive(draft, name, &deps, &output)?
    } else {
        collect_interactive(draft, args.name.clone(), args.wizard, &deps, &output)?
    };

    let target = PathBuf::from(project.name());
    ensure_target_available(&fs, &target).map_err(CliError::Core)?;

    output.print("")?;
    output.header(&format!("Creating '{}'...", project.name()))?;
    info!(project = %project.name(), "scaffold started");

    let service = ScaffoldService::new(default_generators());
    let spinner = make_spinner(&output);
    let result = service.scaffold(&project, &target, &fs);
    spinner.finish_and_clear();
    result.map_err(CliError::Core)?;

    let warnings = service.post_generate(
        &project,
        &target,
        &runner,
        PostGenOptions {
            skip_install: args.skip_install,
        },
    );
    for warning in &warnings {
        output.warning(&format!("{}: {}", warning.step, warning.detail))?;
    }

    output.success(&format!("Project '{}' created!", project.name()))?;

    if !global.quiet {
        print_next_steps(&project, args.skip_install, &output)?;
    }

    Ok(())
}

/// Start the draft from the loaded app-config defaults.
fn seeded_draft(config: &AppConfig) -> ProjectConfigBuilder {
    let mut draft = ProjectConfigBuilder::new();
    if let Some(manager) = config.default_package_manager() {
        draft.set_package_manager(manager);
    }
    if let Some(version) = &config.defaults.python_version {
        draft.set_python_version(version);
    }
    draft
}

/// `--yes` mode: normalize the name, keep every default, and fail hard on a
/// missing package manager since nobody is there to confirm.
fn build_noninteractive(
    mut draft: ProjectConfigBuilder,
    raw_name: &str,
    deps: &DependencyValidator<'_>,
    output: &OutputManager,
) -> CliResult<ProjectConfig> {
    let name = NameValidator::normalize_and_validate(raw_name)
        .map_err(|e| CliError::Core(e.into()))?;
    if name != raw_name {
        output.info(&format!("Project name normalized to '{name}'"))?;
    }
    draft.set_name(name).map_err(|e| CliError::Core(e.into()))?;

    let project = draft.build().map_err(|e| CliError::Core(e.into()))?;

    deps.validate_package_manager(project.package_manager())
        .map_err(CliError::Core)?;

    if project.use_docker() {
        let docker = deps.validate_docker();
        if !docker.available {
            output.warning(&docker.message)?;
        }
    }
    if project.use_git() {
        let git = deps.validate_git();
        if !git.available {
            output.warning(&git.message)?;
        }
    }

    Ok(project)
}

#[cfg(feature = "interactive")]
fn collect_interactive(
    draft: ProjectConfigBuilder,
    initial_name: Option<String>,
    wizard: bool,
    deps: &DependencyValidator<'_>,
    output: &OutputManager,
) -> CliResult<ProjectConfig> {
    use fastforge_core::application::CollectOutcome;

    let outcome = if wizard {
        crate::wizard::collect(draft, initial_name, deps, output)?
    } else {
        crate::prompts::collect(draft, initial_name, deps, output)?
    };

    match outcome {
        CollectOutcome::Completed(config) => Ok(config),
        CollectOutcome::Aborted => {
            output.info("Cancelled; no changes were made")?;
            Err(CliError::Cancelled)
        }
    }
}

#[cfg(not(feature = "interactive"))]
fn collect_interactive(
    _draft: ProjectConfigBuilder,
    _initial_name: Option<String>,
    _wizard: bool,
    _deps: &DependencyValidator<'_>,
    _output: &OutputManager,
) -> CliResult<ProjectConfig> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

fn make_spinner(output: &OutputManager) -> ProgressBar {
    if output.is_quiet() || !output.supports_color() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating project files...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn print_next_steps(
    project: &ProjectConfig,
    skip_install: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let manager = project.package_manager();
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", project.name()))?;
    if skip_install {
        output.print(&format!(
            "  {} {}",
            manager.command(),
            manager.install_args().join(" ")
        ))?;
    }
    let run = match manager {
        PackageManager::Uv => "uv run uvicorn app.main:app --reload",
        PackageManager::Poetry => "poetry run uvicorn app.main:app --reload",
    };
    output.print(&format!("  {run}"))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::Defaults;
    use fastforge_core::application::ports::{CommandRunner, ToolProbe};
    use std::path::Path;

    struct StubRunner {
        tools_present: bool,
    }

    impl CommandRunner for StubRunner {
        fn probe(&self, _command: &str, _args: &[&str]) -> ToolProbe {
            if self.tools_present {
                ToolProbe::available("stub 1.0")
            } else {
                ToolProbe::unavailable()
            }
        }

        fn run(&self, _command: &str, _args: &[&str], _cwd: &Path) -> Result<(), String> {
            Ok(())
        }
    }

    fn plain_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn draft_seeded_from_app_config() {
        let config = AppConfig {
            defaults: Defaults {
                package_manager: Some("poetry".into()),
                python_version: Some("3.12".into()),
            },
            output: Default::default(),
        };
        let draft = seeded_draft(&config);
        assert_eq!(draft.package_manager(), PackageManager::Poetry);
        assert_eq!(draft.python_version(), "3.12");
    }

    #[test]
    fn noninteractive_build_normalizes_the_name() {
        let runner = StubRunner { tools_present: true };
        let deps = DependencyValidator::new(&runner);
        let project =
            build_noninteractive(ProjectConfigBuilder::new(), "My Cool App", &deps, &plain_output())
                .unwrap();
        assert_eq!(project.name(), "my_cool_app");
        assert_eq!(project.package_manager(), PackageManager::Uv);
        assert!(!project.use_database());
    }

    #[test]
    fn noninteractive_build_fails_on_missing_manager() {
        let runner = StubRunner {
            tools_present: false,
        };
        let deps = DependencyValidator::new(&runner);
        let err =
            build_noninteractive(ProjectConfigBuilder::new(), "my_api", &deps, &plain_output())
                .unwrap_err();
        assert!(err.to_string().contains("not installed"));
    }

    #[test]
    fn noninteractive_build_rejects_reserved_names() {
        let runner = StubRunner { tools_present: true };
        let deps = DependencyValidator::new(&runner);
        let err = build_noninteractive(ProjectConfigBuilder::new(), "class", &deps, &plain_output())
            .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }
}
