//! Container file generator.
//!
//! Silent no-op unless containerization is derived on (database support
//! with at least one environment). The Dockerfile is always written when
//! enabled; each compose file follows its environment selection.

use std::path::Path;

use fastforge_core::{
    application::{Generator, materialize, ports::Filesystem},
    domain::{DatabaseEnvironment, FileContent, ProjectConfig, StructureSpec, TemplateContext},
    error::ForgeResult,
};

use crate::templates;

pub struct DockerGenerator;

impl Generator for DockerGenerator {
    fn name(&self) -> &'static str {
        "container files"
    }

    fn generate(
        &self,
        config: &ProjectConfig,
        target: &Path,
        fs: &dyn Filesystem,
    ) -> ForgeResult<()> {
        if !config.use_docker() {
            return Ok(());
        }

        let ctx = config.template_context();

        let mut spec = StructureSpec::new().file("Dockerfile", FileContent::Producer(dockerfile));

        if config.has_environment(DatabaseEnvironment::Development) {
            spec = spec.template("docker-compose.dev.yml", templates::COMPOSE_DEV);
        }
        if config.has_environment(DatabaseEnvironment::Production) {
            spec = spec.template("docker-compose.prod.yml", templates::COMPOSE_PROD);
        }

        materialize(fs, target, &spec, &ctx)
    }
}

/// Dockerfile with a package-manager-specific install layer.
fn dockerfile(ctx: &TemplateContext) -> String {
    let install_layer = match ctx.str("package_manager") {
        "poetry" => {
            "RUN pip install --no-cache-dir poetry \\\n && poetry config virtualenvs.create false \\\n && poetry install --no-interaction --no-root"
        }
        _ => "RUN pip install --no-cache-dir uv \\\n && uv pip install --system --no-cache .",
    };
    let mut local = ctx.clone();
    local.insert("install_layer", install_layer);
    local.render(templates::DOCKERFILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use fastforge_core::domain::PackageManager;

    fn config(
        db: bool,
        envs: Vec<DatabaseEnvironment>,
        manager: PackageManager,
    ) -> ProjectConfig {
        let mut b = ProjectConfig::builder();
        b.set_name("shop_api").unwrap();
        b.set_package_manager(manager);
        b.set_use_database(db);
        b.set_db_environments(envs);
        b.build().unwrap()
    }

    fn run(config: &ProjectConfig) -> MemoryFilesystem {
        let fs = MemoryFilesystem::new();
        DockerGenerator
            .generate(config, Path::new("shop_api"), &fs)
            .unwrap();
        fs
    }

    #[test]
    fn noop_without_database() {
        let fs = run(&config(false, vec![], PackageManager::Uv));
        assert_eq!(fs.file_count(), 0);
        assert!(!fs.exists(Path::new("shop_api/Dockerfile")));
    }

    #[test]
    fn both_environments_produce_both_compose_files() {
        let fs = run(&config(
            true,
            DatabaseEnvironment::both(),
            PackageManager::Uv,
        ));
        assert!(fs.exists(Path::new("shop_api/Dockerfile")));
        assert!(fs.exists(Path::new("shop_api/docker-compose.dev.yml")));
        assert!(fs.exists(Path::new("shop_api/docker-compose.prod.yml")));
    }

    #[test]
    fn single_environment_produces_one_compose_file() {
        let fs = run(&config(
            true,
            vec![DatabaseEnvironment::Production],
            PackageManager::Uv,
        ));
        assert!(fs.exists(Path::new("shop_api/Dockerfile")));
        assert!(!fs.exists(Path::new("shop_api/docker-compose.dev.yml")));
        assert!(fs.exists(Path::new("shop_api/docker-compose.prod.yml")));
    }

    #[test]
    fn dockerfile_install_layer_follows_package_manager() {
        let fs = run(&config(
            true,
            DatabaseEnvironment::both(),
            PackageManager::Poetry,
        ));
        let dockerfile = fs.file_content("shop_api/Dockerfile").unwrap();
        assert!(dockerfile.contains("poetry install"));
        assert!(dockerfile.contains("FROM python:3.11-slim"));
    }

    #[test]
    fn compose_uses_project_slug_for_database_name() {
        let fs = run(&config(
            true,
            vec![DatabaseEnvironment::Development],
            PackageManager::Uv,
        ));
        let compose = fs.file_content("shop_api/docker-compose.dev.yml").unwrap();
        assert!(compose.contains("POSTGRES_DB: shop_api"));
    }
}
