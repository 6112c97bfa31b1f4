//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod parse;
pub mod templates;

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use gantry_adapters::InMemoryStore;
use gantry_core::domain::{DslParser, RequiredRule};
use tracing::debug;

use crate::{
    cli::RequiredRuleArg,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

/// Read model definitions from a file, from stdin for `-`, or nothing.
pub(crate) fn read_models(source: Option<&Path>) -> CliResult<String> {
    match source {
        None => Ok(String::new()),
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .with_cli_context(|| "Failed to read model definitions from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path).with_cli_context(|| {
            format!("Failed to read model definitions from '{}'", path.display())
        }),
    }
}

/// Built-in templates plus overrides from `--templates` or the config.
pub(crate) fn load_store(dir: Option<&Path>, config: &AppConfig) -> CliResult<InMemoryStore> {
    let mut store = InMemoryStore::with_builtin();
    let dir: Option<PathBuf> = dir
        .map(Path::to_path_buf)
        .or_else(|| config.templates.local_path.clone());
    if let Some(dir) = dir {
        let replaced = store.load_overrides(&dir)?;
        debug!(dir = %dir.display(), replaced, "using template overrides");
    }
    Ok(store)
}

/// Parser configured from `--required-rule`, falling back to the config.
pub(crate) fn parser(arg: Option<RequiredRuleArg>, config: &AppConfig) -> CliResult<DslParser> {
    let rule = match arg {
        Some(RequiredRuleArg::Tag) => RequiredRule::Tag,
        Some(RequiredRuleArg::Substring) => RequiredRule::Substring,
        None => config
            .parser
            .required_rule
            .parse()
            .map_err(|message| CliError::ConfigError {
                message,
                source: None,
            })?,
    };
    Ok(DslParser::new().with_required_rule(rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::application::TemplateStore;
    use tempfile::TempDir;

    #[test]
    fn no_source_reads_nothing() {
        assert_eq!(read_models(None).unwrap(), "");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_models(Some(&dir.path().join("models.txt"))).unwrap_err();
        assert!(matches!(err, CliError::IoError { .. }));
    }

    #[test]
    fn flag_beats_config_rule() {
        let mut config = AppConfig::default();
        config.parser.required_rule = "substring".into();

        let from_config = parser(None, &config).unwrap();
        assert_eq!(from_config.required_rule(), RequiredRule::Substring);

        let from_flag = parser(Some(RequiredRuleArg::Tag), &config).unwrap();
        assert_eq!(from_flag.required_rule(), RequiredRule::Tag);
    }

    #[test]
    fn unknown_config_rule_is_config_error() {
        let mut config = AppConfig::default();
        config.parser.required_rule = "sometimes".into();
        assert_eq!(parser(None, &config).unwrap_err().exit_code(), 4);
    }

    #[test]
    fn override_dir_from_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("gitignore.tmpl"), "bin/\n").unwrap();
        let mut config = AppConfig::default();
        config.templates.local_path = Some(dir.path().to_path_buf());

        let store = load_store(None, &config).unwrap();
        assert_eq!(store.get("gitignore").unwrap().body(), "bin/\n");
    }
}
