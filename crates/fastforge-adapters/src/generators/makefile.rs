//! Makefile generator.
//!
//! The target set depends on the whole configuration (runner prefix,
//! linters, container files), so the Makefile is fully produced in Rust.

use std::path::Path;

use fastforge_core::{
    application::{Generator, materialize, ports::Filesystem},
    domain::{FileContent, ProjectConfig, StructureSpec, TemplateContext},
    error::ForgeResult,
};

pub struct MakefileGenerator;

impl Generator for MakefileGenerator {
    fn name(&self) -> &'static str {
        "makefile"
    }

    fn generate(
        &self,
        config: &ProjectConfig,
        target: &Path,
        fs: &dyn Filesystem,
    ) -> ForgeResult<()> {
        if !config.use_makefile() {
            return Ok(());
        }

        let ctx = config.template_context();
        let spec = StructureSpec::new().file("Makefile", FileContent::Producer(makefile));
        materialize(fs, target, &spec, &ctx)
    }
}

fn makefile(ctx: &TemplateContext) -> String {
    let run = match ctx.str("package_manager") {
        "poetry" => "poetry run",
        _ => "uv run",
    };

    let mut phony = vec!["install", "dev", "test"];
    let mut out = String::new();

    out.push_str(&format!("# {} development tasks\n\n", ctx.str("project_name")));
    out.push_str(".DEFAULT_GOAL := help\n\n");

    out.push_str("install:\n");
    match ctx.str("package_manager") {
        "poetry" => out.push_str("\tpoetry install\n\n"),
        _ => out.push_str("\tuv sync\n\n"),
    }

    out.push_str(&format!("dev:\n\t{run} uvicorn app.main:app --reload\n\n"));
    out.push_str(&format!("test:\n\t{run} pytest\n\n"));

    if ctx.flag("has_ruff") {
        phony.push("lint");
        phony.push("format");
        out.push_str(&format!("lint:\n\t{run} ruff check app tests\n\n"));
        out.push_str(&format!("format:\n\t{run} ruff format app tests\n\n"));
    } else if ctx.flag("has_black") {
        phony.push("format");
        out.push_str(&format!("format:\n\t{run} black app tests\n\n"));
    }
    if ctx.flag("has_flake8") {
        phony.push("flake8");
        out.push_str(&format!("flake8:\n\t{run} flake8 app tests\n\n"));
    }

    if ctx.flag("use_docker") {
        if ctx.flag("has_dev_env") {
            phony.push("up-dev");
            out.push_str("up-dev:\n\tdocker compose -f docker-compose.dev.yml up --build\n\n");
        }
        if ctx.flag("has_prod_env") {
            phony.push("up-prod");
            out.push_str("up-prod:\n\tdocker compose -f docker-compose.prod.yml up -d --build\n\n");
        }
    }

    phony.push("help");
    out.push_str("help:\n\t@grep -E '^[a-z-]+:' Makefile | cut -d: -f1\n\n");
    out.push_str(&format!(".PHONY: {}\n", phony.join(" ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use fastforge_core::domain::{DatabaseEnvironment, Linter, PackageManager};

    fn run_gen(config: &ProjectConfig) -> MemoryFilesystem {
        let fs = MemoryFilesystem::new();
        MakefileGenerator
            .generate(config, Path::new("shop_api"), &fs)
            .unwrap();
        fs
    }

    #[test]
    fn noop_when_disabled() {
        let mut b = ProjectConfig::builder();
        b.set_name("shop_api").unwrap();
        b.set_use_makefile(false);
        let fs = run_gen(&b.build().unwrap());
        assert!(!fs.exists(Path::new("shop_api/Makefile")));
    }

    #[test]
    fn uv_defaults_produce_ruff_targets() {
        let mut b = ProjectConfig::builder();
        b.set_name("shop_api").unwrap();
        let fs = run_gen(&b.build().unwrap());

        let makefile = fs.file_content("shop_api/Makefile").unwrap();
        assert!(makefile.contains("uv sync"));
        assert!(makefile.contains("lint:\n\tuv run ruff check"));
        assert!(!makefile.contains("docker compose"));
    }

    #[test]
    fn poetry_and_docker_targets() {
        let mut b = ProjectConfig::builder();
        b.set_name("shop_api").unwrap();
        b.set_package_manager(PackageManager::Poetry)
            .set_linters(vec![Linter::Flake8])
            .set_use_database(true)
            .set_db_environments(vec![DatabaseEnvironment::Development]);
        let fs = run_gen(&b.build().unwrap());

        let makefile = fs.file_content("shop_api/Makefile").unwrap();
        assert!(makefile.contains("poetry install"));
        assert!(makefile.contains("flake8:\n\tpoetry run flake8"));
        assert!(makefile.contains("up-dev:"));
        assert!(!makefile.contains("up-prod:"));
    }
}
