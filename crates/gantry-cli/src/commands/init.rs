//! `gantry init`: write a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(&args)?;

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = render_default()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}

fn target_path(args: &InitArgs) -> CliResult<PathBuf> {
    if args.local {
        return Ok(PathBuf::from(LOCAL_CONFIG));
    }
    AppConfig::user_config_path().ok_or_else(|| CliError::ConfigError {
        message: "no user configuration directory on this platform; use --local".into(),
        source: None,
    })
}

fn render_default() -> CliResult<String> {
    toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = render_default().unwrap();
        assert!(text.contains("[defaults]"));
        assert!(text.contains("port = \"8080\""));

        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.parser.required_rule, "tag");
    }

    #[test]
    fn local_flag_targets_working_directory() {
        let args = InitArgs {
            local: true,
            force: false,
        };
        assert_eq!(target_path(&args).unwrap(), PathBuf::from(".gantry.toml"));
    }
}
