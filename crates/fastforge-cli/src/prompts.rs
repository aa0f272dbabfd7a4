//! Sequential interactive setup: one dialoguer prompt per question.
//!
//! Every question has its own retry loop, so a rejected answer re-asks the
//! same question instead of restarting the session. Ctrl-C anywhere maps to
//! [`CliError::Cancelled`]; declining the final confirmation yields an
//! explicit [`CollectOutcome::Aborted`].
//!
//! The paged flavor lives in [`crate::wizard`]; both converge on the same
//! [`ProjectConfigBuilder`].

use std::io::ErrorKind;

use dialoguer::{
    Confirm, Input, MultiSelect, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};

use fastforge_core::{
    application::{CollectOutcome, DependencyValidator},
    domain::{DatabaseEnvironment, Linter, NameValidator, PackageManager, ProjectConfigBuilder},
};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run the sequential question flow on top of a pre-seeded draft.
pub fn collect(
    mut draft: ProjectConfigBuilder,
    initial_name: Option<String>,
    deps: &DependencyValidator<'_>,
    output: &OutputManager,
) -> CliResult<CollectOutcome> {
    ask_name(&mut draft, initial_name, output)?;
    ask_package_manager(&mut draft, deps, output)?;
    ask_database(&mut draft, deps, output)?;
    ask_linters(&mut draft, output)?;
    ask_git(&mut draft, deps, output)?;

    let makefile = ask_confirm("Generate a Makefile with common tasks?", true, output)?;
    draft.set_use_makefile(makefile);

    render_summary(&draft, output)?;
    if !ask_confirm("Generate the project?", true, output)? {
        return Ok(CollectOutcome::Aborted);
    }

    let config = draft.build().map_err(|e| CliError::Core(e.into()))?;
    Ok(CollectOutcome::Completed(config))
}

// ── Individual questions ──────────────────────────────────────────────────────

fn ask_name(
    draft: &mut ProjectConfigBuilder,
    initial: Option<String>,
    output: &OutputManager,
) -> CliResult<()> {
    let mut pending = initial;
    loop {
        let raw: String = match pending.take() {
            Some(name) => name,
            None => Input::with_theme(&*theme(output))
                .with_prompt("Project name")
                .interact_text()
                .map_err(dialog_err)?,
        };

        let normalized = NameValidator::normalize(&raw);
        if normalized != raw {
            let accept = ask_confirm(
                &format!("Name adjusted to '{normalized}'. Use it?"),
                true,
                output,
            )?;
            if !accept {
                continue;
            }
        }

        match draft.set_name(&normalized) {
            Ok(_) => return Ok(()),
            Err(e) => output.error(&e.to_string())?,
        }
    }
}

fn ask_package_manager(
    draft: &mut ProjectConfigBuilder,
    deps: &DependencyValidator<'_>,
    output: &OutputManager,
) -> CliResult<()> {
    let items = ["uv (recommended)", "poetry"];
    let preselected = PackageManager::all()
        .iter()
        .position(|m| *m == draft.package_manager())
        .unwrap_or(0);

    let manager = loop {
        let idx = Select::with_theme(&*theme(output))
            .with_prompt("Package manager")
            .items(&items)
            .default(preselected)
            .interact()
            .map_err(dialog_err)?;
        let manager = PackageManager::all()[idx];

        match deps.validate_package_manager(manager) {
            Ok(version) => {
                output.success(&format!("{manager} found: {version}"))?;
                break manager;
            }
            Err(e) => {
                output.error(&e.to_string())?;
                output.info(&format!("Install instructions: {}", manager.install_url()))?;
                if ask_confirm("Continue anyway?", false, output)? {
                    break manager;
                }
            }
        }
    };

    draft.set_package_manager(manager);
    Ok(())
}

fn ask_database(
    draft: &mut ProjectConfigBuilder,
    deps: &DependencyValidator<'_>,
    output: &OutputManager,
) -> CliResult<()> {
    let use_db = ask_confirm("Add database support (SQLAlchemy + Alembic)?", true, output)?;
    draft.set_use_database(use_db);
    if !use_db {
        return Ok(());
    }

    let envs = ask_environments(output)?;
    draft.set_db_environments(envs);

    // Compose files need a working container runtime; warn early, never block.
    let docker = deps.validate_docker();
    if docker.available {
        output.success(&docker.message)?;
    } else {
        output.warning(&docker.message)?;
    }
    Ok(())
}

pub(crate) fn ask_environments(output: &OutputManager) -> CliResult<Vec<DatabaseEnvironment>> {
    let items = ["Development only", "Production only", "Both"];
    let idx = Select::with_theme(&*theme(output))
        .with_prompt("Docker environments")
        .items(&items)
        .default(2)
        .interact()
        .map_err(dialog_err)?;
    Ok(match idx {
        0 => vec![DatabaseEnvironment::Development],
        1 => vec![DatabaseEnvironment::Production],
        _ => DatabaseEnvironment::both(),
    })
}

fn ask_linters(draft: &mut ProjectConfigBuilder, output: &OutputManager) -> CliResult<()> {
    let linters = ask_linter_selection(output)?;
    if linters.is_empty() {
        output.info("No linters selected; defaulting to ruff")?;
    }
    draft.set_linters(linters);
    Ok(())
}

pub(crate) fn ask_linter_selection(output: &OutputManager) -> CliResult<Vec<Linter>> {
    let items = ["ruff (recommended)", "black", "flake8"];
    let defaults = [true, false, false];
    let picks = MultiSelect::with_theme(&*theme(output))
        .with_prompt("Linters and formatters (space to toggle)")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(dialog_err)?;

    let linters: Vec<Linter> = picks.into_iter().map(|i| Linter::all()[i]).collect();
    if linters.contains(&Linter::Ruff) && linters.contains(&Linter::Black) {
        output.warning("ruff already formats code; black is redundant alongside it")?;
    }
    Ok(linters)
}

fn ask_git(
    draft: &mut ProjectConfigBuilder,
    deps: &DependencyValidator<'_>,
    output: &OutputManager,
) -> CliResult<()> {
    let use_git = ask_confirm("Initialize a git repository?", true, output)?;
    draft.set_use_git(use_git);
    if !use_git {
        return Ok(());
    }

    let git = deps.validate_git();
    if !git.available {
        output.warning(&git.message)?;
    }

    let conventions = ask_confirm("Set up commit conventions (commitlint)?", false, output)?;
    draft.set_use_commit_conventions(conventions);
    Ok(())
}

// ── Shared helpers (also used by the wizard flavor) ───────────────────────────

pub(crate) fn ask_confirm(prompt: &str, default: bool, output: &OutputManager) -> CliResult<bool> {
    Confirm::with_theme(&*theme(output))
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(dialog_err)
}

pub(crate) fn theme(output: &OutputManager) -> Box<dyn Theme> {
    if output.supports_color() {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}

/// Ctrl-C during a prompt becomes a cancellation, not an I/O failure.
pub(crate) fn dialog_err(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted => CliError::Cancelled,
        dialoguer::Error::IO(io) => CliError::IoError {
            message: "prompt interaction failed".into(),
            source: io,
        },
    }
}

/// Render the draft before the final confirmation.
pub(crate) fn render_summary(
    draft: &ProjectConfigBuilder,
    output: &OutputManager,
) -> CliResult<()> {
    output.print("")?;
    output.header("Project summary")?;
    output.print(&format!(
        "  Name:              {}",
        draft.name().unwrap_or("(unset)")
    ))?;
    output.print(&format!("  Package manager:   {}", draft.package_manager()))?;
    output.print(&format!("  Python version:    {}", draft.python_version()))?;

    if draft.use_database() {
        let envs: Vec<&str> = draft.db_environments().iter().map(|e| e.as_str()).collect();
        output.print(&format!("  Database:          yes ({})", envs.join(", ")))?;
        output.print("  Docker:            yes")?;
    } else {
        output.print("  Database:          no")?;
        output.print("  Docker:            no")?;
    }

    let linters: Vec<&str> = draft.linters().iter().map(|l| l.as_str()).collect();
    output.print(&format!(
        "  Linters:           {}",
        if linters.is_empty() {
            "ruff (default)".to_string()
        } else {
            linters.join(", ")
        }
    ))?;

    let git = if draft.use_git() {
        if draft.use_commit_conventions() {
            "yes (with commit conventions)"
        } else {
            "yes"
        }
    } else {
        "no"
    };
    output.print(&format!("  Git:               {git}"))?;
    output.print(&format!(
        "  Makefile:          {}",
        if draft.use_makefile() { "yes" } else { "no" }
    ))?;
    output.print("")?;
    Ok(())
}
