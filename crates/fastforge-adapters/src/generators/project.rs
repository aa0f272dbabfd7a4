//! Base project tree generator.
//!
//! Always runs first: every other generator writes into the tree created
//! here. The layout mirrors a conventional FastAPI service - `app/` with
//! core/api/domain packages, a `tests/` package, and (with database
//! support) an infrastructure package plus empty alembic directories.

use std::path::Path;

use fastforge_core::{
    application::{Generator, materialize, ports::Filesystem},
    domain::{ProjectConfig, StructureSpec},
    error::ForgeResult,
};

use crate::templates;

pub struct ProjectGenerator;

impl Generator for ProjectGenerator {
    fn name(&self) -> &'static str {
        "project tree"
    }

    fn generate(
        &self,
        config: &ProjectConfig,
        target: &Path,
        fs: &dyn Filesystem,
    ) -> ForgeResult<()> {
        let ctx = config.template_context();

        let core = StructureSpec::new()
            .literal("__init__.py", "")
            .template("config.py", templates::CONFIG_PY)
            .template("dependencies.py", templates::DEPENDENCIES_PY);

        let routes = StructureSpec::new()
            .literal("__init__.py", "")
            .template("health.py", templates::HEALTH_PY);

        let api = StructureSpec::new()
            .literal("__init__.py", "")
            .dir("routes", routes);

        let mut app = StructureSpec::new()
            .literal("__init__.py", "")
            .template("main.py", templates::MAIN_PY)
            .dir("core", core)
            .dir("api", api)
            .dir("domain", StructureSpec::new().literal("__init__.py", ""));

        if config.use_database() {
            app = app.dir(
                "infrastructure",
                StructureSpec::new()
                    .literal("__init__.py", "")
                    .template("database.py", templates::DATABASE_PY),
            );
        }

        let tests = StructureSpec::new()
            .literal("__init__.py", "")
            .template("test_main.py", templates::TEST_MAIN_PY);

        let mut spec = StructureSpec::new().dir("app", app).dir("tests", tests);

        if config.use_database() {
            spec = spec.dir("alembic", StructureSpec::new().empty_dir("versions"));
        }

        materialize(fs, target, &spec, &ctx)
    }
}
