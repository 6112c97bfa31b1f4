//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gantry",
    bin_name = "gantry",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Gin + GORM CRUD backend generator",
    long_about = "Gantry turns a small model description into a complete Go \
                  REST API project (Gin, GORM, OpenAPI) packaged as a zip archive.",
    after_help = "EXAMPLES:\n\
        \x20 gantry generate --name bookstore --models models.txt\n\
        \x20 printf 'Book\\nTitle string required\\n' | gantry gen -n bookstore --models -\n\
        \x20 gantry parse --models models.txt --format json\n\
        \x20 gantry completions bash > /usr/share/bash-completion/completions/gantry",
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
    /// Generate a project archive from model definitions.
    #[command(
        visible_alias = "gen",
        about = "Generate a project archive",
        after_help = "MODEL FORMAT:\n\
            \x20 One block per model, blocks separated by a blank line.\n\
            \x20 First line is the model name; each further line is\n\
            \x20 <Field> <GoType> [required] [gorm:\"...\"] [binding:\"...\"]\n\n\
            EXAMPLES:\n\
            \x20 gantry generate -n shop --models models.txt\n\
            \x20 gantry generate -n shop --module github.com/acme/shop --port 9000 --models -\n\
            \x20 gantry generate -n shop --models models.txt --dry-run"
    )]
    Generate(GenerateArgs),

    /// Parse model definitions and report what was understood.
    #[command(
        about = "Parse model definitions",
        after_help = "EXAMPLES:\n\
            \x20 gantry parse --models models.txt\n\
            \x20 gantry parse --models - --format json < models.txt"
    )]
    Parse(ParseArgs),

    /// List the templates a generated project is built from.
    #[command(
        visible_alias = "ls",
        about = "List templates",
        after_help = "EXAMPLES:\n\
            \x20 gantry templates\n\
            \x20 gantry templates --templates ./my-templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Initialise a Gantry configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gantry init           # user config directory\n\
            \x20 gantry init --local   # .gantry.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gantry completions bash > ~/.local/share/bash-completion/completions/gantry\n\
            \x20 gantry completions zsh  > ~/.zfunc/_gantry\n\
            \x20 gantry completions fish > ~/.config/fish/completions/gantry.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Gantry configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gantry config get defaults.port\n\
            \x20 gantry config list\n\
            \x20 gantry config path"
    )]
    Config(ConfigCommands),
}

// ── shared argument groups ────────────────────────────────────────────────────

/// Where model definitions and templates come from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// File with model definitions, or `-` for stdin.
    #[arg(
        short = 'm',
        long = "models",
        value_name = "FILE",
        help = "Model definitions file ('-' for stdin)"
    )]
    pub models: Option<PathBuf>,

    /// How the `required` flag is detected.
    #[arg(
        long = "required-rule",
        value_enum,
        value_name = "RULE",
        help = "How fields are marked required (default from config)"
    )]
    pub required_rule: Option<RequiredRuleArg>,
}

/// Template override directory.
#[derive(Debug, Args)]
pub struct TemplateDirArg {
    /// Directory of `<id>.tmpl` files replacing built-in templates.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Directory with template overrides"
    )]
    pub templates: Option<PathBuf>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `gantry generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project name; also names the archive.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Go module path.  Defaults to `<module_prefix>/<name>` or `<name>`.
    #[arg(long = "module", value_name = "PATH", help = "Go module path")]
    pub module: Option<String>,

    /// HTTP port of the generated server.
    #[arg(short = 'p', long = "port", value_name = "PORT", help = "Server port")]
    pub port: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub template_dir: TemplateDirArg,

    /// Archive destination.  Defaults to `./<name>.zip`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Archive path (default: ./<name>.zip)"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite an existing archive.
    #[arg(long = "force", help = "Overwrite an existing archive")]
    pub force: bool,

    /// Show what would be generated without writing anything.
    #[arg(long = "dry-run", help = "Show planned files without writing")]
    pub dry_run: bool,

    /// Fail if any model line was skipped or adjusted.
    #[arg(long = "strict", help = "Treat parse diagnostics as errors")]
    pub strict: bool,
}

// ── parse ─────────────────────────────────────────────────────────────────────

/// Arguments for `gantry parse`.
#[derive(Debug, Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ReportFormat,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `gantry templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[command(flatten)]
    pub template_dir: TemplateDirArg,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ReportFormat,
}

/// Output format for report commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable table.
    Table,
    /// JSON document.
    Json,
}

/// CLI spelling of the core `RequiredRule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequiredRuleArg {
    /// `required` tag, or `binding:`/`validate:` listing `required`.
    Tag,
    /// Any occurrence of "required" on the line.
    #[value(alias = "legacy")]
    Substring,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gantry init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.gantry.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gantry completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gantry config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.port`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "gantry", "generate", "--name", "shop", "--models", "m.txt", "--strict",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.name, "shop");
        assert_eq!(args.source.models, Some(PathBuf::from("m.txt")));
        assert!(args.strict);
        assert!(!args.dry_run);
    }

    #[test]
    fn gen_alias_and_stdin_models() {
        let cli = Cli::parse_from(["gantry", "gen", "-n", "shop", "-m", "-"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.source.models, Some(PathBuf::from("-")));
    }

    #[test]
    fn generate_requires_a_name() {
        assert!(Cli::try_parse_from(["gantry", "generate"]).is_err());
    }

    #[test]
    fn legacy_alias_selects_substring_rule() {
        let cli = Cli::parse_from(["gantry", "parse", "--required-rule", "legacy"]);
        let Commands::Parse(args) = cli.command else {
            panic!("expected Parse command");
        };
        assert_eq!(args.source.required_rule, Some(RequiredRuleArg::Substring));
        assert_eq!(args.format, ReportFormat::Table);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["gantry", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }
}
