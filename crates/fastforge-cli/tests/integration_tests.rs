//! End-to-end tests for the fastforge binary.
//!
//! Scaffolding tests run with fake `uv` / `git` executables prepended to
//! PATH so the pre-flight probes succeed without the real tools installed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fastforge() -> Command {
    Command::cargo_bin("fastforge").unwrap()
}

/// Directory of stub executables that answer any invocation successfully.
#[cfg(unix)]
fn fake_tool_dir(tools: &[&str]) -> TempDir {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    for tool in tools {
        let path = dir.path().join(tool);
        fs::write(&path, "#!/bin/sh\necho \"stub 1.0\"\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    dir
}

#[cfg(unix)]
fn tool_path(fake: &TempDir) -> String {
    format!(
        "{}:{}",
        fake.path().display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

// ── Basic surface ─────────────────────────────────────────────────────────────

#[test]
fn version_subcommand_prints_name_and_version() {
    fastforge()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fastforge"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_subcommands() {
    fastforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("module"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn completions_emit_a_bash_script() {
    fastforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fastforge"));
}

#[test]
fn quiet_and_verbose_conflict_is_a_usage_error() {
    fastforge()
        .args(["--quiet", "-v", "version"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn explicit_missing_config_file_fails_with_guidance() {
    fastforge()
        .args(["--config", "/nonexistent/fastforge.toml", "version"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn yes_without_name_is_a_usage_error() {
    fastforge()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .code(2);
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
#[cfg(unix)]
fn init_yes_scaffolds_the_default_project() {
    let tools = fake_tool_dir(&["uv", "git"]);
    let workdir = TempDir::new().unwrap();

    fastforge()
        .current_dir(workdir.path())
        .env("PATH", tool_path(&tools))
        .args(["init", "blog_api", "--yes", "--skip-install", "--no-color"])
        .assert()
        .success();

    let project = workdir.path().join("blog_api");
    for file in [
        "app/__init__.py",
        "app/main.py",
        "app/core/config.py",
        "app/api/routes/health.py",
        "tests/test_main.py",
        "pyproject.toml",
        "fastforgerc.json",
        ".env.example",
        ".env",
        "README.md",
        ".gitignore",
        "Makefile",
    ] {
        assert!(project.join(file).exists(), "missing {file}");
    }

    // defaults carry no database, so no container files
    assert!(!project.join("Dockerfile").exists());
    assert!(!project.join("app/infrastructure").exists());

    let manifest = fs::read_to_string(project.join("pyproject.toml")).unwrap();
    assert!(manifest.contains("fastapi"));
    assert!(manifest.contains("name = \"blog_api\""));
}

#[test]
#[cfg(unix)]
fn init_normalizes_the_project_name() {
    let tools = fake_tool_dir(&["uv", "git"]);
    let workdir = TempDir::new().unwrap();

    fastforge()
        .current_dir(workdir.path())
        .env("PATH", tool_path(&tools))
        .args(["init", "My Cool App", "--yes", "--skip-install", "--no-color"])
        .assert()
        .success();

    assert!(workdir.path().join("my_cool_app/app/main.py").exists());
    assert!(!workdir.path().join("My Cool App").exists());
}

#[test]
#[cfg(unix)]
fn init_refuses_an_existing_directory() {
    let tools = fake_tool_dir(&["uv", "git"]);
    let workdir = TempDir::new().unwrap();
    fs::create_dir(workdir.path().join("taken")).unwrap();

    fastforge()
        .current_dir(workdir.path())
        .env("PATH", tool_path(&tools))
        .args(["init", "taken", "--yes", "--skip-install", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    // nothing was written into the existing directory
    assert_eq!(fs::read_dir(workdir.path().join("taken")).unwrap().count(), 0);
}

#[test]
#[cfg(unix)]
fn init_rejects_reserved_names() {
    let tools = fake_tool_dir(&["uv", "git"]);
    let workdir = TempDir::new().unwrap();

    fastforge()
        .current_dir(workdir.path())
        .env("PATH", tool_path(&tools))
        .args(["init", "class", "--yes", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Python keyword"));
}

// ── module ────────────────────────────────────────────────────────────────────

#[test]
fn module_outside_a_project_fails() {
    let workdir = TempDir::new().unwrap();

    fastforge()
        .current_dir(workdir.path())
        .args(["module", "users", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("FastAPI project"));

    assert!(!workdir.path().join("app").exists());
}

#[test]
fn module_inside_a_project_creates_the_package() {
    let workdir = TempDir::new().unwrap();
    fs::create_dir_all(workdir.path().join("app")).unwrap();
    fs::write(workdir.path().join("app/main.py"), "app = FastAPI()\n").unwrap();
    fs::write(
        workdir.path().join("pyproject.toml"),
        "dependencies = [\"fastapi>=0.115\"]\n",
    )
    .unwrap();

    fastforge()
        .current_dir(workdir.path())
        .args(["module", "users", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("include_router"));

    for file in [
        "app/modules/__init__.py",
        "app/modules/users/__init__.py",
        "app/modules/users/schemas.py",
        "app/modules/users/routes.py",
        "app/modules/users/services.py",
        "app/modules/users/helpers.py",
    ] {
        assert!(workdir.path().join(file).exists(), "missing {file}");
    }
    // no database in this project, so no models file
    assert!(!workdir.path().join("app/modules/users/models.py").exists());
}

#[test]
fn module_rejects_invalid_names() {
    let workdir = TempDir::new().unwrap();
    fs::create_dir_all(workdir.path().join("app")).unwrap();
    fs::write(workdir.path().join("app/main.py"), "app = FastAPI()\n").unwrap();

    fastforge()
        .current_dir(workdir.path())
        .args(["module", "def", "--no-color"])
        .assert()
        .failure()
        .code(1);

    assert!(!workdir.path().join("app/modules").exists());
}
