//! Module generator for existing projects.
//!
//! Unlike the scaffolding generators this one runs inside an already
//! generated project, so it is not part of the `ScaffoldService` pipeline.
//! It verifies the target actually looks like one of our FastAPI projects
//! before touching the filesystem, then drops a self-contained module
//! package under `app/modules/`.

use std::path::Path;

use fastforge_core::{
    application::{ApplicationError, materialize, ports::Filesystem},
    domain::{StructureSpec, TemplateContext},
    error::ForgeResult,
};
use tracing::{debug, instrument};

use crate::templates;

pub struct ModuleGenerator {
    name: String,
}

impl ModuleGenerator {
    /// `name` must already be a validated snake_case identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative paths this run will create, for user-facing output.
    pub fn planned_files(&self, project_dir: &Path, fs: &dyn Filesystem) -> Vec<String> {
        let base = format!("app/modules/{}", self.name);
        let mut files = vec![
            format!("{base}/__init__.py"),
            format!("{base}/schemas.py"),
            format!("{base}/routes.py"),
            format!("{base}/services.py"),
            format!("{base}/helpers.py"),
        ];
        if fs.exists(&project_dir.join("app/infrastructure/database.py")) {
            files.push(format!("{base}/models.py"));
        }
        files
    }

    #[instrument(skip(self, fs), fields(module = %self.name))]
    pub fn generate(&self, project_dir: &Path, fs: &dyn Filesystem) -> ForgeResult<()> {
        self.check_project(project_dir, fs)?;

        let has_database = fs.exists(&project_dir.join("app/infrastructure/database.py"));
        debug!(has_database, "generating module files");

        let mut ctx = TemplateContext::new();
        ctx.insert("module_name", self.name.as_str());
        ctx.insert("module_class", pascal_case(&self.name));

        let mut module = StructureSpec::new()
            .literal("__init__.py", "")
            .template("schemas.py", templates::MODULE_SCHEMAS_PY)
            .template("routes.py", templates::MODULE_ROUTES_PY)
            .template("services.py", templates::MODULE_SERVICES_PY)
            .template("helpers.py", templates::MODULE_HELPERS_PY);

        if has_database {
            module = module.template("models.py", templates::MODULE_MODELS_PY);
        }

        // The modules package marker must survive earlier runs untouched.
        let modules_init = project_dir.join("app/modules/__init__.py");
        if !fs.exists(&modules_init) {
            fs.create_dir_all(&project_dir.join("app/modules"))?;
            fs.write_file(&modules_init, "")?;
        }

        let spec = StructureSpec::new().dir(
            "app",
            StructureSpec::new().dir(
                "modules",
                StructureSpec::new().dir(&self.name, module),
            ),
        );

        materialize(fs, project_dir, &spec, &ctx)
    }

    /// Reject anything that does not look like a generated FastAPI project.
    fn check_project(&self, project_dir: &Path, fs: &dyn Filesystem) -> ForgeResult<()> {
        if !fs.exists(&project_dir.join("app/main.py")) {
            return Err(ApplicationError::NotAProject {
                reason: "app/main.py not found".to_string(),
            }
            .into());
        }

        let manifest = project_dir.join("pyproject.toml");
        if fs.exists(&manifest) {
            let content = fs.read_to_string(&manifest)?;
            if !content.to_lowercase().contains("fastapi") {
                return Err(ApplicationError::NotAProject {
                    reason: "pyproject.toml does not list fastapi".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// `user_account` -> `UserAccount`
fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    fn project_fixture(with_database: bool, with_manifest: Option<&str>) -> MemoryFilesystem {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("proj/app")).unwrap();
        fs.write_file(Path::new("proj/app/main.py"), "app = FastAPI()").unwrap();
        if with_database {
            fs.create_dir_all(Path::new("proj/app/infrastructure")).unwrap();
            fs.write_file(Path::new("proj/app/infrastructure/database.py"), "")
                .unwrap();
        }
        if let Some(manifest) = with_manifest {
            fs.write_file(Path::new("proj/pyproject.toml"), manifest).unwrap();
        }
        fs
    }

    #[test]
    fn pascal_case_handles_multi_word_names() {
        assert_eq!(pascal_case("user"), "User");
        assert_eq!(pascal_case("user_account"), "UserAccount");
        assert_eq!(pascal_case("a_b_c"), "ABC");
    }

    #[test]
    fn generates_module_package() {
        let fs = project_fixture(false, Some("dependencies = [\"fastapi>=0.115\"]"));
        ModuleGenerator::new("orders")
            .generate(Path::new("proj"), &fs)
            .unwrap();

        for file in [
            "proj/app/modules/__init__.py",
            "proj/app/modules/orders/__init__.py",
            "proj/app/modules/orders/schemas.py",
            "proj/app/modules/orders/routes.py",
            "proj/app/modules/orders/services.py",
            "proj/app/modules/orders/helpers.py",
        ] {
            assert!(fs.exists(Path::new(file)), "missing {file}");
        }
        assert!(!fs.exists(Path::new("proj/app/modules/orders/models.py")));

        let routes = fs.file_content("proj/app/modules/orders/routes.py").unwrap();
        assert!(routes.contains("prefix=\"/orders\""));
        assert!(routes.contains("OrdersRead"));
    }

    #[test]
    fn database_project_gets_models() {
        let fs = project_fixture(true, None);
        ModuleGenerator::new("orders")
            .generate(Path::new("proj"), &fs)
            .unwrap();

        let models = fs.file_content("proj/app/modules/orders/models.py").unwrap();
        assert!(models.contains("__tablename__ = \"orders\""));
    }

    #[test]
    fn rejects_directory_without_entry_point() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("proj")).unwrap();

        let err = ModuleGenerator::new("orders")
            .generate(Path::new("proj"), &fs)
            .unwrap_err();
        assert!(err.to_string().contains("app/main.py not found"));
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn rejects_non_fastapi_manifest() {
        let fs = project_fixture(false, Some("dependencies = [\"flask\"]"));
        let err = ModuleGenerator::new("orders")
            .generate(Path::new("proj"), &fs)
            .unwrap_err();
        assert!(err.to_string().contains("does not list fastapi"));
        assert!(!fs.exists(Path::new("proj/app/modules")));
    }

    #[test]
    fn existing_modules_marker_is_preserved() {
        let fs = project_fixture(false, None);
        fs.create_dir_all(Path::new("proj/app/modules")).unwrap();
        fs.write_file(Path::new("proj/app/modules/__init__.py"), "# custom exports\n")
            .unwrap();

        ModuleGenerator::new("orders")
            .generate(Path::new("proj"), &fs)
            .unwrap();

        let marker = fs.file_content("proj/app/modules/__init__.py").unwrap();
        assert_eq!(marker, "# custom exports\n");
    }

    #[test]
    fn planned_files_reflect_database_presence() {
        let fs = project_fixture(true, None);
        let planned = ModuleGenerator::new("orders").planned_files(Path::new("proj"), &fs);
        assert!(planned.contains(&"app/modules/orders/models.py".to_string()));
        assert_eq!(planned.len(), 6);
    }
}
