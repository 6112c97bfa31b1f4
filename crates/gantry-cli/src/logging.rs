//! Stderr logging for the `gantry` binary.
//!
//! The library crates emit events inside spans such as `generate`,
//! `scaffold` and `archive`; this module decides which of them reach the
//! terminal.
//! `RUST_LOG`, when set, replaces the directives built from the flags.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the level picked by `-v`/`-q`.
const TARGETS: [&str; 3] = ["gantry", "gantry_core", "gantry_adapters"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    ansi: bool,
    /// Emit a close event with busy/idle time for every span.
    timings: bool,
    /// Show which module an event came from; only useful when debugging.
    targets: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_terminal: bool) -> Self {
        let level = args.log_level();
        Self {
            level,
            ansi: stderr_is_terminal && !args.no_color,
            timings: args.timings,
            targets: level >= LevelFilter::DEBUG,
        }
    }

    /// Other crates stay at `warn`, whatever the verbosity.
    fn directives(&self) -> String {
        let level = self.level.to_string().to_lowercase();
        let mut directives = vec!["warn".to_string()];
        directives.extend(TARGETS.iter().map(|t| format!("{t}={level}")));
        directives.join(",")
    }

    fn span_events(&self) -> FmtSpan {
        if self.timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the global subscriber. Must run once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.directives()))?;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(settings.ansi)
        .with_target(settings.targets)
        .with_span_events(settings.span_events());

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}
