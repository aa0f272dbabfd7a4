//! Configuration file generator.
//!
//! Writes everything at the project root that is not code: the per-project
//! record (`fastforgerc.json`), the package manifest, environment files,
//! README, ignore file (git only), and the commit-convention config when
//! enabled. `pyproject.toml` and the README hints vary structurally with
//! the configuration, so they are produced in Rust rather than rendered
//! from a template with conditionals.

use std::path::Path;

use fastforge_core::{
    application::{Generator, ensure_env_file, materialize, ports::Filesystem},
    domain::{FileContent, ProjectConfig, StructureSpec, TemplateContext},
    error::ForgeResult,
};

use crate::templates;

pub struct ConfigFilesGenerator;

impl Generator for ConfigFilesGenerator {
    fn name(&self) -> &'static str {
        "config files"
    }

    fn generate(
        &self,
        config: &ProjectConfig,
        target: &Path,
        fs: &dyn Filesystem,
    ) -> ForgeResult<()> {
        let ctx = config.template_context();

        let mut spec = StructureSpec::new()
            .file("fastforgerc.json", FileContent::Producer(project_record))
            .file("pyproject.toml", FileContent::Producer(pyproject))
            .file(".env.example", FileContent::Producer(env_example))
            .file("README.md", FileContent::Producer(readme));

        if config.use_git() {
            spec = spec.template(".gitignore", templates::GITIGNORE);
        }

        if config.use_commit_conventions() {
            spec = spec.template("commitlint.config.js", templates::COMMITLINT_CONFIG_JS);
        }

        materialize(fs, target, &spec, &ctx)?;

        // .env is seeded from the example exactly once.
        ensure_env_file(fs, target)
    }
}

/// Serialized template context - the record of every chosen option.
fn project_record(ctx: &TemplateContext) -> String {
    let mut record =
        serde_json::to_string_pretty(ctx).unwrap_or_else(|_| String::from("{}"));
    record.push('\n');
    record
}

/// README with package-manager-specific getting-started hints.
fn readme(ctx: &TemplateContext) -> String {
    let (install_hint, run_hint) = match ctx.str("package_manager") {
        "poetry" => ("poetry install", "poetry run uvicorn app.main:app --reload"),
        _ => ("uv sync", "uv run uvicorn app.main:app --reload"),
    };
    let mut local = ctx.clone();
    local.insert("install_hint", install_hint);
    local.insert("run_hint", run_hint);
    local.render(templates::README_MD)
}

fn env_example(ctx: &TemplateContext) -> String {
    let mut content = ctx.render(templates::ENV_EXAMPLE);
    if ctx.flag("use_database") {
        content.push_str(&ctx.render(templates::ENV_EXAMPLE_DATABASE));
    }
    content
}

/// Assemble pyproject.toml for the chosen package manager and linters.
fn pyproject(ctx: &TemplateContext) -> String {
    let name = ctx.str("project_slug");
    let python = ctx.str("python_version");
    let poetry = ctx.str("package_manager") == "poetry";

    let mut deps = vec![
        "fastapi>=0.115".to_string(),
        "uvicorn[standard]>=0.30".to_string(),
        "pydantic-settings>=2.0".to_string(),
    ];
    if ctx.flag("use_database") {
        deps.push("sqlalchemy[asyncio]>=2.0".to_string());
        deps.push("asyncpg>=0.29".to_string());
        deps.push("alembic>=1.13".to_string());
    }

    let mut dev_deps = vec!["pytest>=8.0".to_string(), "httpx>=0.27".to_string()];
    if ctx.flag("has_ruff") {
        dev_deps.push("ruff>=0.6".to_string());
    }
    if ctx.flag("has_black") {
        dev_deps.push("black>=24.0".to_string());
    }
    if ctx.flag("has_flake8") {
        dev_deps.push("flake8>=7.0".to_string());
    }

    let mut out = String::new();

    if poetry {
        out.push_str(&format!(
            "[tool.poetry]\nname = \"{name}\"\nversion = \"0.1.0\"\ndescription = \"\"\n\
             packages = [{{ include = \"app\" }}]\n\n[tool.poetry.dependencies]\npython = \"^{python}\"\n"
        ));
        for dep in &deps {
            let (pkg, version) = split_requirement(dep);
            out.push_str(&format!("{pkg} = \"{version}\"\n"));
        }
        out.push_str("\n[tool.poetry.group.dev.dependencies]\n");
        for dep in &dev_deps {
            let (pkg, version) = split_requirement(dep);
            out.push_str(&format!("{pkg} = \"{version}\"\n"));
        }
        out.push_str(
            "\n[build-system]\nrequires = [\"poetry-core\"]\nbuild-backend = \"poetry.core.masonry.api\"\n",
        );
    } else {
        out.push_str(&format!(
            "[project]\nname = \"{name}\"\nversion = \"0.1.0\"\ndescription = \"\"\n\
             requires-python = \">={python}\"\ndependencies = [\n"
        ));
        for dep in &deps {
            out.push_str(&format!("    \"{dep}\",\n"));
        }
        out.push_str("]\n\n[dependency-groups]\ndev = [\n");
        for dep in &dev_deps {
            out.push_str(&format!("    \"{dep}\",\n"));
        }
        out.push_str("]\n");
    }

    if ctx.flag("has_ruff") {
        out.push_str(&format!(
            "\n[tool.ruff]\nline-length = 88\ntarget-version = \"py{}\"\n",
            python.replace('.', "")
        ));
    }
    if ctx.flag("has_black") {
        out.push_str("\n[tool.black]\nline-length = 88\n");
    }

    out
}

/// Split `pkg>=1.0` into poetry-style name and constraint.
fn split_requirement(dep: &str) -> (&str, String) {
    match dep.find(">=") {
        Some(idx) => {
            let name = dep[..idx].trim_end_matches("[standard]").trim_end_matches("[asyncio]");
            (name, format!(">={}", &dep[idx + 2..]))
        }
        None => (dep, "*".to_string()),
    }
}
