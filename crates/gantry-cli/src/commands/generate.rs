//! `gantry generate`: turn model definitions into a project archive.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use gantry_adapters::local_generation_service;
use gantry_core::{
    application::{ApplicationError, GenerationRequest, GenerationService},
    domain::{Diagnostic, ProjectIdentity},
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct GenerateSummary<'a> {
    project: &'a ProjectIdentity,
    archive: Option<String>,
    entries: Vec<String>,
    diagnostics: &'a [Diagnostic],
    dry_run: bool,
}

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;
    let project = build_identity(&args, &config);
    debug!(%project, "project identity resolved");

    let models_text = commands::read_models(args.source.models.as_deref())?;
    let store = commands::load_store(args.template_dir.templates.as_deref(), &config)?;
    let parser = commands::parser(args.source.required_rule, &config)?;
    let service = local_generation_service(store).with_parser(parser);

    let request = GenerationRequest::new(project.clone(), models_text).strict(args.strict);

    if args.dry_run {
        let (structure, diagnostics) = service.preview(&request)?;
        if args.strict && !diagnostics.is_empty() {
            print_diagnostics(&output, &diagnostics)?;
            return Err(CliError::Core(
                ApplicationError::StrictModeViolation {
                    count: diagnostics.len(),
                }
                .into(),
            ));
        }

        let entries: Vec<String> = structure
            .files()
            .map(|f| f.path.to_string_lossy().replace('\\', "/"))
            .collect();

        if output.is_json() {
            return Ok(output.json(&GenerateSummary {
                project: &project,
                archive: None,
                entries,
                diagnostics: &diagnostics,
                dry_run: true,
            })?);
        }

        output.header(&format!("Dry run: {} files for {project}", entries.len()))?;
        for entry in &entries {
            output.print(&format!("  {entry}"))?;
        }
        print_diagnostics(&output, &diagnostics)?;
        return Ok(());
    }

    let destination = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(project.archive_filename()));
    if destination.exists() && !args.force {
        return Err(CliError::OutputExists { path: destination });
    }

    output.info(&format!("Generating {project}"))?;
    let archive = match service.generate(&request) {
        Ok(archive) => archive,
        Err(e) => {
            if let Some(diagnostics) = strict_diagnostics(&args, &service, &request) {
                print_diagnostics(&output, &diagnostics)?;
            }
            return Err(e.into());
        }
    };

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(&destination, &archive.bytes)
        .with_cli_context(|| format!("Failed to write archive to '{}'", destination.display()))?;
    info!(
        path = %destination.display(),
        entries = archive.entry_count,
        bytes = archive.bytes.len(),
        "archive written"
    );

    if output.is_json() {
        return Ok(output.json(&GenerateSummary {
            project: &project,
            archive: Some(destination.display().to_string()),
            entries: Vec::new(),
            diagnostics: &archive.diagnostics,
            dry_run: false,
        })?);
    }

    print_diagnostics(&output, &archive.diagnostics)?;
    output.success(&format!(
        "Wrote {} ({} files)",
        destination.display(),
        archive.entry_count
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  unzip {}", destination.display()))?;
        output.print(&format!("  cd {} && go mod tidy && go run ./cmd", project.name()))?;
    }

    Ok(())
}

/// Re-parse to show what strict mode rejected.
fn strict_diagnostics(
    args: &GenerateArgs,
    service: &GenerationService,
    request: &GenerationRequest,
) -> Option<Vec<Diagnostic>> {
    if !args.strict {
        return None;
    }
    let outcome = service.parser().parse(&request.models_text);
    (!outcome.is_clean()).then_some(outcome.diagnostics)
}

fn print_diagnostics(output: &OutputManager, diagnostics: &[Diagnostic]) -> CliResult<()> {
    for diagnostic in diagnostics {
        output.warning(&diagnostic.to_string())?;
    }
    Ok(())
}

fn build_identity(args: &GenerateArgs, config: &AppConfig) -> ProjectIdentity {
    let module = args.module.clone().unwrap_or_else(|| {
        match config.defaults.module_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => {
                format!("{}/{}", prefix.trim_end_matches('/'), args.name)
            }
            _ => args.name.clone(),
        }
    });
    let port = args
        .port
        .clone()
        .unwrap_or_else(|| config.defaults.port.clone());
    ProjectIdentity::new(args.name.clone(), module, port)
}

/// Names become the archive file name and the default Go module path.
fn validate_project_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| {
        Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        })
    };

    let Some(first) = name.chars().next() else {
        return invalid("name cannot be empty");
    };
    if !first.is_ascii_alphabetic() {
        return invalid("name must start with a letter");
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return invalid(&format!("'{bad}' is not allowed"));
    }
    Ok(())
}
