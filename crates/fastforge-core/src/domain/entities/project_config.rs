//! Project configuration and its builder.
//!
//! [`ProjectConfig`] holds every choice the user makes during `init`. It is
//! immutable once built; all mutation goes through [`ProjectConfigBuilder`],
//! whose setters enforce the cross-field invariants at write time:
//!
//! - database environments are cleared when database support is disabled;
//! - commit conventions are cleared when git is disabled;
//! - an empty linter selection falls back to the default (`ruff`).
//!
//! Collectors (sequential prompts, the paged wizard, `--yes` defaults) only
//! ever talk to the builder, so a config that violates an invariant cannot
//! be constructed.

use crate::domain::{
    entities::render::TemplateContext,
    error::DomainError,
    validation::NameValidator,
    value_objects::{DatabaseEnvironment, Linter, PackageManager},
};

/// Default Python version for generated projects.
pub const DEFAULT_PYTHON_VERSION: &str = "3.11";

// ── ProjectConfig ─────────────────────────────────────────────────────────────

/// Complete configuration for a generated FastAPI backend project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    name: String,
    package_manager: PackageManager,
    use_database: bool,
    db_environments: Vec<DatabaseEnvironment>,
    linters: Vec<Linter>,
    use_git: bool,
    use_commit_conventions: bool,
    use_makefile: bool,
    python_version: String,
}

impl ProjectConfig {
    /// Start building a configuration.
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn use_database(&self) -> bool {
        self.use_database
    }

    pub fn db_environments(&self) -> &[DatabaseEnvironment] {
        &self.db_environments
    }

    pub fn linters(&self) -> &[Linter] {
        &self.linters
    }

    pub fn use_git(&self) -> bool {
        self.use_git
    }

    pub fn use_commit_conventions(&self) -> bool {
        self.use_commit_conventions
    }

    pub fn use_makefile(&self) -> bool {
        self.use_makefile
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    /// Whether container files should be generated.
    ///
    /// Derived, never stored: containerization only exists to run the
    /// database, so it requires database support plus at least one
    /// environment.
    pub fn use_docker(&self) -> bool {
        self.use_database && !self.db_environments.is_empty()
    }

    /// Name normalized for file names and Python imports.
    pub fn project_slug(&self) -> String {
        self.name.to_lowercase().replace('-', "_")
    }

    pub fn has_linter(&self, linter: Linter) -> bool {
        self.linters.contains(&linter)
    }

    pub fn has_environment(&self, env: DatabaseEnvironment) -> bool {
        self.db_environments.contains(&env)
    }

    /// Flatten the configuration into the template rendering context.
    ///
    /// This is the single source of truth for template variables; the
    /// serialized form of the returned map is also the per-project record
    /// written into the generated tree.
    pub fn template_context(&self) -> TemplateContext {
        let mut ctx = TemplateContext::new();
        ctx.insert("project_name", self.name.as_str());
        ctx.insert("project_slug", self.project_slug());
        ctx.insert("package_manager", self.package_manager.as_str());
        ctx.insert("python_version", self.python_version.as_str());
        ctx.insert("use_database", self.use_database);
        ctx.insert(
            "db_environments",
            self.db_environments
                .iter()
                .map(|e| e.as_str().to_string())
                .collect::<Vec<_>>(),
        );
        ctx.insert("use_docker", self.use_docker());
        ctx.insert(
            "linters",
            self.linters
                .iter()
                .map(|l| l.as_str().to_string())
                .collect::<Vec<_>>(),
        );
        ctx.insert("use_git", self.use_git);
        ctx.insert("use_commit_conventions", self.use_commit_conventions);
        ctx.insert("use_makefile", self.use_makefile);
        // Convenience flags for templates
        ctx.insert("has_ruff", self.has_linter(Linter::Ruff));
        ctx.insert("has_black", self.has_linter(Linter::Black));
        ctx.insert("has_flake8", self.has_linter(Linter::Flake8));
        ctx.insert(
            "has_dev_env",
            self.has_environment(DatabaseEnvironment::Development),
        );
        ctx.insert(
            "has_prod_env",
            self.has_environment(DatabaseEnvironment::Production),
        );
        ctx
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Mutable draft of a [`ProjectConfig`].
///
/// Setters take `&mut self` (not `self`) because interactive collectors
/// revisit fields when the user steps back; each setter keeps the draft
/// internally consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfigBuilder {
    name: Option<String>,
    package_manager: PackageManager,
    use_database: bool,
    db_environments: Vec<DatabaseEnvironment>,
    linters: Vec<Linter>,
    use_git: bool,
    use_commit_conventions: bool,
    use_makefile: bool,
    python_version: String,
}

impl Default for ProjectConfigBuilder {
    fn default() -> Self {
        Self {
            name: None,
            package_manager: PackageManager::default(),
            use_database: false,
            db_environments: Vec::new(),
            linters: vec![Linter::Ruff],
            use_git: true,
            use_commit_conventions: false,
            use_makefile: true,
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
        }
    }
}

impl ProjectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project name. The name is validated as-is; normalize first
    /// via [`NameValidator::normalize`] when accepting free-form input.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, DomainError> {
        let name = name.into();
        NameValidator::validate(&name)?;
        self.name = Some(name);
        Ok(self)
    }

    pub fn set_package_manager(&mut self, manager: PackageManager) -> &mut Self {
        self.package_manager = manager;
        self
    }

    /// Toggle database support. Disabling clears any selected environments;
    /// enabling defaults to both environments until overridden.
    pub fn set_use_database(&mut self, enabled: bool) -> &mut Self {
        self.use_database = enabled;
        if enabled {
            if self.db_environments.is_empty() {
                self.db_environments = DatabaseEnvironment::both();
            }
        } else {
            self.db_environments.clear();
        }
        self
    }

    /// Select database environments. Ignored while database support is off.
    pub fn set_db_environments(&mut self, envs: Vec<DatabaseEnvironment>) -> &mut Self {
        if self.use_database {
            self.db_environments = dedup(envs);
        }
        self
    }

    /// Select linters. An empty selection falls back to the default.
    pub fn set_linters(&mut self, linters: Vec<Linter>) -> &mut Self {
        self.linters = if linters.is_empty() {
            vec![Linter::Ruff]
        } else {
            dedup(linters)
        };
        self
    }

    /// Toggle git. Disabling also disables commit conventions, which are
    /// meaningless without a repository.
    pub fn set_use_git(&mut self, enabled: bool) -> &mut Self {
        self.use_git = enabled;
        if !enabled {
            self.use_commit_conventions = false;
        }
        self
    }

    /// Toggle commit-convention tooling. Ignored while git is off.
    pub fn set_use_commit_conventions(&mut self, enabled: bool) -> &mut Self {
        if self.use_git {
            self.use_commit_conventions = enabled;
        }
        self
    }

    pub fn set_use_makefile(&mut self, enabled: bool) -> &mut Self {
        self.use_makefile = enabled;
        self
    }

    pub fn set_python_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.python_version = version.into();
        self
    }

    // Read accessors for summary rendering before finalization.

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn use_database(&self) -> bool {
        self.use_database
    }

    pub fn db_environments(&self) -> &[DatabaseEnvironment] {
        &self.db_environments
    }

    pub fn linters(&self) -> &[Linter] {
        &self.linters
    }

    pub fn use_git(&self) -> bool {
        self.use_git
    }

    pub fn use_commit_conventions(&self) -> bool {
        self.use_commit_conventions
    }

    pub fn use_makefile(&self) -> bool {
        self.use_makefile
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    /// Finalize the draft into an immutable config.
    ///
    /// Re-checks every invariant so a finalized config is valid even if the
    /// builder was manipulated in an unexpected order.
    pub fn build(&self) -> Result<ProjectConfig, DomainError> {
        let name = self
            .name
            .clone()
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        NameValidator::validate(&name)?;

        let db_environments = if self.use_database {
            if self.db_environments.is_empty() {
                DatabaseEnvironment::both()
            } else {
                self.db_environments.clone()
            }
        } else {
            Vec::new()
        };

        let linters = if self.linters.is_empty() {
            vec![Linter::Ruff]
        } else {
            self.linters.clone()
        };

        Ok(ProjectConfig {
            name,
            package_manager: self.package_manager,
            use_database: self.use_database,
            db_environments,
            linters,
            use_git: self.use_git,
            use_commit_conventions: self.use_git && self.use_commit_conventions,
            use_makefile: self.use_makefile,
            python_version: self.python_version.clone(),
        })
    }
}

fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn named_builder() -> ProjectConfigBuilder {
        let mut b = ProjectConfig::builder();
        b.set_name("blog_api").unwrap();
        b
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = named_builder().build().unwrap();
        assert_eq!(config.package_manager(), PackageManager::Uv);
        assert!(!config.use_database());
        assert!(config.db_environments().is_empty());
        assert_eq!(config.linters(), &[Linter::Ruff]);
        assert!(config.use_git());
        assert!(!config.use_commit_conventions());
        assert!(config.use_makefile());
        assert_eq!(config.python_version(), "3.11");
    }

    #[test]
    fn build_requires_name() {
        let err = ProjectConfig::builder().build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "name" });
    }

    #[test]
    fn set_name_rejects_invalid_input() {
        let mut b = ProjectConfig::builder();
        assert!(b.set_name("My App").is_err());
        assert!(b.set_name("my_app").is_ok());
    }

    #[test]
    fn enabling_database_defaults_to_both_environments() {
        let mut b = named_builder();
        b.set_use_database(true);
        let config = b.build().unwrap();
        assert_eq!(config.db_environments(), DatabaseEnvironment::both());
        assert!(config.use_docker());
    }

    #[test]
    fn disabling_database_clears_environments() {
        let mut b = named_builder();
        b.set_use_database(true)
            .set_db_environments(vec![DatabaseEnvironment::Development]);
        b.set_use_database(false);
        let config = b.build().unwrap();
        assert!(config.db_environments().is_empty());
        assert!(!config.use_docker());
    }

    #[test]
    fn environments_ignored_without_database() {
        let mut b = named_builder();
        b.set_db_environments(DatabaseEnvironment::both());
        assert!(b.db_environments().is_empty());
    }

    #[test]
    fn disabling_git_clears_commit_conventions() {
        let mut b = named_builder();
        b.set_use_commit_conventions(true);
        b.set_use_git(false);
        let config = b.build().unwrap();
        assert!(!config.use_commit_conventions());
    }

    #[test]
    fn commit_conventions_ignored_without_git() {
        let mut b = named_builder();
        b.set_use_git(false);
        b.set_use_commit_conventions(true);
        assert!(!b.use_commit_conventions());
    }

    #[test]
    fn empty_linter_selection_falls_back_to_ruff() {
        let mut b = named_builder();
        b.set_linters(vec![]);
        assert_eq!(b.linters(), &[Linter::Ruff]);
    }

    #[test]
    fn linter_selection_deduplicates() {
        let mut b = named_builder();
        b.set_linters(vec![Linter::Black, Linter::Black, Linter::Ruff]);
        assert_eq!(b.linters(), &[Linter::Black, Linter::Ruff]);
    }

    #[test]
    fn slug_normalizes_hyphens() {
        // set_name only accepts snake_case, so exercise the slug through
        // the accessor on a manually assembled config.
        let mut b = named_builder();
        b.set_name("blog_api").unwrap();
        assert_eq!(b.build().unwrap().project_slug(), "blog_api");
    }

    #[test]
    fn template_context_carries_convenience_flags() {
        let mut b = named_builder();
        b.set_use_database(true)
            .set_db_environments(vec![DatabaseEnvironment::Development])
            .set_linters(vec![Linter::Ruff, Linter::Black]);
        let ctx = b.build().unwrap().template_context();

        assert_eq!(ctx.str("project_name"), "blog_api");
        assert_eq!(ctx.str("package_manager"), "uv");
        assert!(ctx.flag("use_docker"));
        assert!(ctx.flag("has_dev_env"));
        assert!(!ctx.flag("has_prod_env"));
        assert!(ctx.flag("has_ruff"));
        assert!(ctx.flag("has_black"));
        assert!(!ctx.flag("has_flake8"));
    }
}
