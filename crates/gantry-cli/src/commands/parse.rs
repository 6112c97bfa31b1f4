//! `gantry parse`: show how model definitions are understood.

use tracing::instrument;

use gantry_core::domain::{Model, ParseOutcome};

use crate::{
    cli::{ParseArgs, ReportFormat},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ParseArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let text = commands::read_models(args.source.models.as_deref())?;
    let parser = commands::parser(args.source.required_rule, &config)?;
    let outcome = parser.parse(&text);

    if args.format == ReportFormat::Json || output.is_json() {
        output.json(&outcome)?;
        return Ok(());
    }

    print_table(&outcome, &output)
}

fn print_table(outcome: &ParseOutcome, output: &OutputManager) -> CliResult<()> {
    if outcome.models.is_empty() {
        output.info("No models defined")?;
    }

    for model in &outcome.models {
        output.header(&model_heading(model))?;
        let width = model
            .fields()
            .iter()
            .map(|f| f.name.len())
            .max()
            .unwrap_or(0);
        for field in model.fields() {
            let mut detail = format!("{}  gorm:\"{}\"", field.field_type, field.persistence_tag);
            if field.required {
                detail.push_str("  required");
            }
            output.row(&field.name, &detail, width)?;
        }
        output.print("")?;
    }

    for diagnostic in &outcome.diagnostics {
        output.warning(&diagnostic.to_string())?;
    }
    Ok(())
}

fn model_heading(model: &Model) -> String {
    format!(
        "{} (/{}, pkg/models/{}.go)",
        model.name(),
        model.plural_name(),
        model.snake_name()
    )
}
