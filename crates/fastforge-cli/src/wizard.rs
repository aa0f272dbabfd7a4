//! Paged setup wizard: one step per page with Next/Back navigation.
//!
//! The page order and answer handling live in the core
//! [`StepFlow`](fastforge_core::application::StepFlow) state machine; this
//! module only renders pages with dialoguer and feeds answers back in.
//! Pressing Esc on any page opens a small navigation menu (stay / back /
//! cancel). The summary is a terminal page offering generate / back /
//! cancel.

use dialoguer::{Confirm, Input, MultiSelect, Select};

use fastforge_core::{
    application::{CollectOutcome, DependencyValidator, SetupStep, StepFlow},
    domain::{
        DatabaseEnvironment, DomainError, Linter, NameValidator, PackageManager,
        ProjectConfigBuilder,
    },
};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
    prompts::{ask_confirm, dialog_err, render_summary, theme},
};

/// What the user chose to do on the current page.
enum PageAction {
    Next,
    Stay,
    Back,
    Cancel,
}

/// One wizard page with its recorded answer.
enum WizardStep {
    Name { answer: String },
    Manager { choice: PackageManager },
    Database { enabled: bool, envs: Vec<DatabaseEnvironment> },
    Linters { selection: Vec<Linter> },
    Git { enabled: bool, conventions: bool },
    Makefile { enabled: bool },
}

impl SetupStep for WizardStep {
    fn title(&self) -> &str {
        match self {
            Self::Name { .. } => "Project name",
            Self::Manager { .. } => "Package manager",
            Self::Database { .. } => "Database support",
            Self::Linters { .. } => "Linters and formatters",
            Self::Git { .. } => "Version control",
            Self::Makefile { .. } => "Makefile",
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Self::Name { answer } => NameValidator::validate(answer).map_err(|e| e.to_string()),
            _ => Ok(()),
        }
    }

    fn commit(&self, draft: &mut ProjectConfigBuilder) -> Result<(), DomainError> {
        match self {
            Self::Name { answer } => {
                draft.set_name(answer.clone())?;
            }
            Self::Manager { choice } => {
                draft.set_package_manager(*choice);
            }
            Self::Database { enabled, envs } => {
                draft.set_use_database(*enabled);
                draft.set_db_environments(envs.clone());
            }
            Self::Linters { selection } => {
                draft.set_linters(selection.clone());
            }
            Self::Git { enabled, conventions } => {
                draft.set_use_git(*enabled);
                draft.set_use_commit_conventions(*conventions);
            }
            Self::Makefile { enabled } => {
                draft.set_use_makefile(*enabled);
            }
        }
        Ok(())
    }
}

impl WizardStep {
    fn ask(
        &mut self,
        deps: &DependencyValidator<'_>,
        output: &OutputManager,
        at_first: bool,
    ) -> CliResult<PageAction> {
        match self {
            Self::Name { answer } => {
                let theme = theme(output);
                let mut input = Input::with_theme(&*theme).with_prompt("Project name");
                if !answer.is_empty() {
                    input = input.default(answer.clone());
                }
                let raw: String = input.interact_text().map_err(dialog_err)?;

                let normalized = NameValidator::normalize(&raw);
                if normalized != raw {
                    let accept = ask_confirm(
                        &format!("Name adjusted to '{normalized}'. Use it?"),
                        true,
                        output,
                    )?;
                    if !accept {
                        return Ok(PageAction::Stay);
                    }
                }
                *answer = normalized;
                Ok(PageAction::Next)
            }

            Self::Manager { choice } => {
                let items = ["uv (recommended)", "poetry"];
                let preselected = PackageManager::all()
                    .iter()
                    .position(|m| m == choice)
                    .unwrap_or(0);
                let Some(idx) = Select::with_theme(&*theme(output))
                    .with_prompt("Package manager")
                    .items(&items)
                    .default(preselected)
                    .interact_opt()
                    .map_err(dialog_err)?
                else {
                    return nav_menu(at_first, output);
                };

                let manager = PackageManager::all()[idx];
                match deps.validate_package_manager(manager) {
                    Ok(version) => output.success(&format!("{manager} found: {version}"))?,
                    Err(e) => {
                        output.error(&e.to_string())?;
                        output.info(&format!(
                            "Install instructions: {}",
                            manager.install_url()
                        ))?;
                        if !ask_confirm("Continue anyway?", false, output)? {
                            return Ok(PageAction::Stay);
                        }
                    }
                }
                *choice = manager;
                Ok(PageAction::Next)
            }

            Self::Database { enabled, envs } => {
                let Some(use_db) = Confirm::with_theme(&*theme(output))
                    .with_prompt("Add database support (SQLAlchemy + Alembic)?")
                    .default(*enabled)
                    .interact_opt()
                    .map_err(dialog_err)?
                else {
                    return nav_menu(at_first, output);
                };

                *enabled = use_db;
                if !use_db {
                    envs.clear();
                    return Ok(PageAction::Next);
                }

                let items = ["Development only", "Production only", "Both"];
                let Some(idx) = Select::with_theme(&*theme(output))
                    .with_prompt("Docker environments")
                    .items(&items)
                    .default(2)
                    .interact_opt()
                    .map_err(dialog_err)?
                else {
                    return nav_menu(at_first, output);
                };
                *envs = match idx {
                    0 => vec![DatabaseEnvironment::Development],
                    1 => vec![DatabaseEnvironment::Production],
                    _ => DatabaseEnvironment::both(),
                };

                let docker = deps.validate_docker();
                if docker.available {
                    output.success(&docker.message)?;
                } else {
                    output.warning(&docker.message)?;
                }
                Ok(PageAction::Next)
            }

            Self::Linters { selection } => {
                let items = ["ruff (recommended)", "black", "flake8"];
                let defaults = [
                    selection.contains(&Linter::Ruff) || selection.is_empty(),
                    selection.contains(&Linter::Black),
                    selection.contains(&Linter::Flake8),
                ];
                let Some(picks) = MultiSelect::with_theme(&*theme(output))
                    .with_prompt("Linters and formatters (space to toggle)")
                    .items(&items)
                    .defaults(&defaults)
                    .interact_opt()
                    .map_err(dialog_err)?
                else {
                    return nav_menu(at_first, output);
                };

                let linters: Vec<Linter> = picks.into_iter().map(|i| Linter::all()[i]).collect();
                if linters.contains(&Linter::Ruff) && linters.contains(&Linter::Black) {
                    output
                        .warning("ruff already formats code; black is redundant alongside it")?;
                }
                if linters.is_empty() {
                    output.info("No linters selected; defaulting to ruff")?;
                }
                *selection = linters;
                Ok(PageAction::Next)
            }

            Self::Git { enabled, conventions } => {
                let Some(use_git) = Confirm::with_theme(&*theme(output))
                    .with_prompt("Initialize a git repository?")
                    .default(*enabled)
                    .interact_opt()
                    .map_err(dialog_err)?
                else {
                    return nav_menu(at_first, output);
                };

                *enabled = use_git;
                if !use_git {
                    *conventions = false;
                    return Ok(PageAction::Next);
                }

                let git = deps.validate_git();
                if !git.available {
                    output.warning(&git.message)?;
                }

                let Some(with_conventions) = Confirm::with_theme(&*theme(output))
                    .with_prompt("Set up commit conventions (commitlint)?")
                    .default(*conventions)
                    .interact_opt()
                    .map_err(dialog_err)?
                else {
                    return nav_menu(at_first, output);
                };
                *conventions = with_conventions;
                Ok(PageAction::Next)
            }

            Self::Makefile { enabled } => {
                let Some(answer) = Confirm::with_theme(&*theme(output))
                    .with_prompt("Generate a Makefile with common tasks?")
                    .default(*enabled)
                    .interact_opt()
                    .map_err(dialog_err)?
                else {
                    return nav_menu(at_first, output);
                };
                *enabled = answer;
                Ok(PageAction::Next)
            }
        }
    }
}

/// Esc on a page: let the user stay, step back, or cancel the session.
fn nav_menu(at_first: bool, output: &OutputManager) -> CliResult<PageAction> {
    let mut items = vec!["Stay on this step"];
    if !at_first {
        items.push("Go back");
    }
    items.push("Cancel setup");

    let idx = Select::with_theme(&*theme(output))
        .items(&items)
        .default(0)
        .interact()
        .map_err(dialog_err)?;

    Ok(match items[idx] {
        "Go back" => PageAction::Back,
        "Cancel setup" => PageAction::Cancel,
        _ => PageAction::Stay,
    })
}

/// Run the paged wizard on top of a pre-seeded draft.
pub fn collect(
    draft: ProjectConfigBuilder,
    initial_name: Option<String>,
    deps: &DependencyValidator<'_>,
    output: &OutputManager,
) -> CliResult<CollectOutcome> {
    let steps: Vec<Box<WizardStep>> = vec![
        Box::new(WizardStep::Name {
            answer: initial_name
                .map(|n| NameValidator::normalize(&n))
                .unwrap_or_default(),
        }),
        Box::new(WizardStep::Manager {
            choice: draft.package_manager(),
        }),
        Box::new(WizardStep::Database {
            enabled: true,
            envs: Vec::new(),
        }),
        Box::new(WizardStep::Linters {
            selection: vec![Linter::Ruff],
        }),
        Box::new(WizardStep::Git {
            enabled: true,
            conventions: false,
        }),
        Box::new(WizardStep::Makefile { enabled: true }),
    ];

    let mut flow: StepFlow<WizardStep> = StepFlow::with_draft(steps, draft);

    loop {
        if flow.at_summary() {
            render_summary(flow.draft(), output)?;
            let items = ["Generate project", "Go back", "Cancel"];
            let choice = Select::with_theme(&*theme(output))
                .items(&items)
                .default(0)
                .interact_opt()
                .map_err(dialog_err)?;

            match choice {
                Some(0) => return flow.confirm().map_err(|e| CliError::Core(e.into())),
                Some(1) => flow.back(),
                _ => return Ok(flow.cancel()),
            }
            continue;
        }

        output.print("")?;
        output.header(&format!(
            "Step {} of {}: {}",
            flow.position() + 1,
            flow.step_count(),
            flow.current().title()
        ))?;
        if let Some(err) = flow.error() {
            output.error(err)?;
        }

        let at_first = flow.at_first_step();
        match flow.current_mut().ask(deps, output, at_first)? {
            // A failed advance stays put; the recorded error is shown on
            // the next iteration.
            PageAction::Next => {
                flow.advance();
            }
            PageAction::Stay => {}
            PageAction::Back => flow.back(),
            PageAction::Cancel => return Ok(flow.cancel()),
        }
    }
}
