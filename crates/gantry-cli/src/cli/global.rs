//! Flags shared by every `gantry` subcommand.

use std::path::PathBuf;

use clap::{Args, builder::FalseyValueParser};
use tracing_subscriber::filter::LevelFilter;

const VERBOSE_HELP: &str = "\
How much of the generation pipeline to log on stderr:
    (none)  warnings, including skipped model lines
    -v      one line per request: models parsed, scaffold and archive done
    -vv     every staged file and archive entry, with the request id
    -vvv    template lookups and span enter/exit";

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more of the pipeline (-v, -vv, -vvv)",
        long_help = VERBOSE_HELP
    )]
    pub verbose: u8,

    /// Only print errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log how long each pipeline stage took when its span closes.
    #[arg(long, global = true)]
    pub timings: bool,

    /// Plain output without ANSI colours. `NO_COLOR=1` has the same effect.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of `.gantry.toml` or the user config.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report format for generate, parse and templates.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Level applied to the gantry crates when `RUST_LOG` is unset.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coloured on a terminal, plain otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    /// Machine-readable reports and summaries.
    Json,
}
