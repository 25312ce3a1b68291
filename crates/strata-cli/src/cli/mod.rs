//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use strata_core::domain::ComponentKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Module scaffolding for layered PHP applications",
    long_about = "Strata creates module skeletons for a modular monolith, \
                  generates classes inside them and describes what exists.",
    after_help = "EXAMPLES:\n\
        \x20 strata new Blog Shop\n\
        \x20 strata make controller Blog Post\n\
        \x20 strata generate policy Blog Post\n\
        \x20 strata show Blog --json\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
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
    /// Create one or more modules.
    #[command(
        visible_alias = "n",
        about = "Create new modules",
        after_help = "EXAMPLES:\n\
            \x20 strata new Blog\n\
            \x20 strata new blog UserProfile --no-register\n\
            \x20 strata new Blog --force"
    )]
    New(NewArgs),

    /// Generate a typed component inside a module.
    #[command(
        visible_alias = "m",
        about = "Generate a component",
        after_help = "EXAMPLES:\n\
            \x20 strata make controller Blog Post\n\
            \x20 strata make entity Blog Admin/Post\n\
            \x20 strata make unit Blog PostService"
    )]
    Make(MakeArgs),

    /// Generate a component for any configured key.
    #[command(
        visible_alias = "g",
        about = "Generate a component by configuration key",
        after_help = "EXAMPLES:\n\
            \x20 strata generate policy Blog Post\n\
            \x20 strata generate command Blog PublishPosts --force"
    )]
    Generate(GenerateArgs),

    /// List discovered modules.
    #[command(
        visible_alias = "ls",
        about = "List modules",
        after_help = "EXAMPLES:\n\
            \x20 strata list\n\
            \x20 strata list --routes\n\
            \x20 strata list --json"
    )]
    List(ListArgs),

    /// Describe one module or all of them.
    #[command(
        about = "Show module details",
        after_help = "EXAMPLES:\n\
            \x20 strata show Blog\n\
            \x20 strata show --json"
    )]
    Show(ShowArgs),

    /// Write the default configuration and stubs into the project.
    #[command(
        about = "Publish configuration and stubs",
        after_help = "EXAMPLES:\n\
            \x20 strata publish\n\
            \x20 strata publish --config-only\n\
            \x20 strata publish --templates-only --force"
    )]
    Publish(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get modules.base_path\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `strata new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Module names; each is converted to StudlyCase.
    #[arg(value_name = "NAME", required = true, num_args = 1.., help = "Module names")]
    pub names: Vec<String>,

    /// Overwrite existing scaffold files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Leave the bootstrap providers file untouched.
    #[arg(long = "no-register", help = "Do not register the service provider")]
    pub no_register: bool,
}

// ── make / generate ───────────────────────────────────────────────────────────

/// Arguments for `strata make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Component type.
    #[arg(value_name = "KIND", value_enum, help = "Component type")]
    pub kind: Kind,

    #[command(flatten)]
    pub target: ComponentTarget,
}

/// Arguments for `strata generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Component key from `paths`, `test_paths` or `stubs`.
    #[arg(value_name = "KEY", help = "Configured component key")]
    pub key: String,

    #[command(flatten)]
    pub target: ComponentTarget,
}

/// Module, class name and overwrite flag shared by `make` and `generate`.
#[derive(Debug, Args)]
pub struct ComponentTarget {
    /// Existing module.
    #[arg(value_name = "MODULE", help = "Target module")]
    pub module: String,

    /// Class name; `Admin/Post` nests the class in a sub-namespace.
    #[arg(value_name = "NAME", help = "Class name, optionally nested with '/'")]
    pub name: String,

    #[arg(short = 'f', long = "force", help = "Overwrite an existing file")]
    pub force: bool,
}

/// Component types with a dedicated generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Controller,
    Request,
    Resource,
    Middleware,
    Entity,
    ValueObject,
    RepositoryInterface,
    Event,
    Service,
    Dto,
    Listener,
    Model,
    Repository,
    Seeder,
    Factory,
    #[value(name = "unit", alias = "unit-test")]
    UnitTest,
    #[value(name = "feature", alias = "feature-test")]
    FeatureTest,
}

impl From<Kind> for ComponentKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Controller => Self::Controller,
            Kind::Request => Self::Request,
            Kind::Resource => Self::Resource,
            Kind::Middleware => Self::Middleware,
            Kind::Entity => Self::Entity,
            Kind::ValueObject => Self::ValueObject,
            Kind::RepositoryInterface => Self::RepositoryInterface,
            Kind::Event => Self::Event,
            Kind::Service => Self::Service,
            Kind::Dto => Self::Dto,
            Kind::Listener => Self::Listener,
            Kind::Model => Self::Model,
            Kind::Repository => Self::Repository,
            Kind::Seeder => Self::Seeder,
            Kind::Factory => Self::Factory,
            Kind::UnitTest => Self::UnitTest,
            Kind::FeatureTest => Self::FeatureTest,
        }
    }
}

// ── list / show ───────────────────────────────────────────────────────────────

/// Arguments for `strata list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Report which route files each module has.
    #[arg(long = "routes", help = "Include route file status")]
    pub routes: bool,

    #[arg(long = "json", help = "Print JSON instead of a table")]
    pub json: bool,
}

/// Arguments for `strata show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Module to describe; all modules when omitted.
    #[arg(value_name = "MODULE", help = "Module name (default: all)")]
    pub module: Option<String>,

    #[arg(long = "json", help = "Print JSON instead of text")]
    pub json: bool,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `strata publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite published files")]
    pub force: bool,

    #[arg(
        long = "config-only",
        conflicts_with = "templates_only",
        help = "Only write the configuration file"
    )]
    pub config_only: bool,

    #[arg(long = "templates-only", help = "Only write the stubs")]
    pub templates_only: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Supported shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `strata config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value by dotted key.
    Get {
        /// Dotted key, for example `modules.base_namespace`.
        key: String,
    },

    /// Print the whole resolved configuration.
    List,

    /// Print the path of the configuration file in use.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
