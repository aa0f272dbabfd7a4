//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fastforge",
    bin_name = "fastforge",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{26a1} FastAPI backend scaffolding",
    long_about = "fastforge generates production-ready FastAPI backend projects \
                  with optional database, Docker, linting, and git setup.",
    after_help = "EXAMPLES:\n\
        \x20 fastforge init my_api\n\
        \x20 fastforge init my_api --yes --skip-install\n\
        \x20 fastforge module users\n\
        \x20 fastforge completions bash > /usr/share/bash-completion/completions/fastforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new FastAPI project.
    #[command(
        visible_alias = "i",
        about = "Create a new FastAPI project",
        after_help = "EXAMPLES:\n\
            \x20 fastforge init                  # fully interactive\n\
            \x20 fastforge init my_api           # interactive, name pre-filled\n\
            \x20 fastforge init my_api --yes     # all defaults, no prompts\n\
            \x20 fastforge init my_api --wizard  # paged wizard with back navigation"
    )]
    Init(InitArgs),

    /// Add a module to an existing project.
    #[command(
        visible_alias = "m",
        about = "Add a module to the current project",
        after_help = "EXAMPLES:\n\
            \x20 fastforge module users\n\
            \x20 fastforge module order_items"
    )]
    Module(ModuleArgs),

    /// Print the tool name and version.
    #[command(about = "Show version information")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fastforge completions bash > ~/.local/share/bash-completion/completions/fastforge\n\
            \x20 fastforge completions zsh  > ~/.zfunc/_fastforge\n\
            \x20 fastforge completions fish > ~/.config/fish/completions/fastforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fastforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name. Prompted for when omitted; normalized to a valid
    /// Python package name (lowercase, underscores).
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub name: Option<String>,

    /// Accept all defaults and skip every prompt.
    #[arg(
        short = 'y',
        long = "yes",
        requires = "name",
        help = "Accept defaults and skip prompts (requires PROJECT_NAME)"
    )]
    pub yes: bool,

    /// Use the paged wizard instead of sequential questions.
    #[arg(
        long = "wizard",
        conflicts_with = "yes",
        help = "Paged setup wizard with back navigation"
    )]
    pub wizard: bool,

    /// Skip the dependency-install step after generation.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,
}

// ── module ────────────────────────────────────────────────────────────────────

/// Arguments for `fastforge module`.
#[derive(Debug, Args)]
pub struct ModuleArgs {
    /// Module name; goes through the same normalization as project names.
    #[arg(value_name = "NAME", help = "Module name")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fastforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
