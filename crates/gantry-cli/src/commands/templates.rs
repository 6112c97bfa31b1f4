//! `gantry templates`: list the templates a project is rendered from.

use gantry_core::application::{TemplateInfo, TemplateScope, TemplateService};

use crate::{
    cli::{ReportFormat, TemplatesArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = commands::load_store(args.template_dir.templates.as_deref(), &config)?;
    let catalogue = TemplateService::new(Box::new(store)).catalogue()?;

    if args.format == ReportFormat::Json || output.is_json() {
        output.json(&catalogue)?;
        return Ok(());
    }

    let width = catalogue.iter().map(|t| t.id.len()).max().unwrap_or(0);

    output.header("Project templates")?;
    print_scope(&catalogue, TemplateScope::Project, width, &output)?;
    output.print("")?;
    output.header("Per-model templates ({} is the model's snake_case name)")?;
    print_scope(&catalogue, TemplateScope::Model, width, &output)?;
    Ok(())
}

fn print_scope(
    catalogue: &[TemplateInfo],
    scope: TemplateScope,
    width: usize,
    output: &OutputManager,
) -> CliResult<()> {
    for info in catalogue.iter().filter(|t| t.scope == scope) {
        output.row(&info.id, &format!("{}  ({} bytes)", info.output_path, info.size), width)?;
    }
    Ok(())
}
