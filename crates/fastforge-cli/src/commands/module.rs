//! `fastforge module`: add a module to an existing project.

use tracing::instrument;

use fastforge_adapters::{LocalFilesystem, ModuleGenerator};
use fastforge_core::domain::NameValidator;

use crate::{
    cli::ModuleArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Generate a module package under `app/modules/` in the current directory.
#[instrument(skip_all, fields(module = %args.name))]
pub fn execute(args: ModuleArgs, output: OutputManager) -> CliResult<()> {
    let name =
        NameValidator::normalize_and_validate(&args.name).map_err(|e| CliError::Core(e.into()))?;
    if name != args.name {
        output.info(&format!("Module name normalized to '{name}'"))?;
    }

    let fs = LocalFilesystem::new();
    let project_dir = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve the current directory".into(),
        source: e,
    })?;

    let generator = ModuleGenerator::new(&name);
    let planned = generator.planned_files(&project_dir, &fs);
    generator.generate(&project_dir, &fs).map_err(CliError::Core)?;

    output.success(&format!("Module '{name}' created"))?;
    for file in &planned {
        output.print(&format!("  {file}"))?;
    }

    // The generator never edits existing code; wiring up the router stays a
    // manual step.
    output.print("")?;
    output.info("Register the router in app/main.py:")?;
    output.print(&format!(
        "  from app.modules.{name} import routes as {name}_routes"
    ))?;
    output.print(&format!("  app.include_router({name}_routes.router)"))?;

    Ok(())
}
