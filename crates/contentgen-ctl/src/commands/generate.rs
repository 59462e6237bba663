//! Runs one generation over the input directory and reports what was written.

use contentgen_tooling::config::load_config;
use contentgen_tooling::model::load_model;
use contentgen_tooling::template_engine::TemplateEngine;
use contentgen_tooling::{GenerationReport, GeneratorError, Pipeline};

use crate::output;
use crate::Cli;

pub(crate) fn handle_generate_command(cli: &Cli) -> Result<(), GeneratorError> {
    tracing::debug!(
        input = ?cli.input,
        output = ?cli.output,
        templates = ?cli.templates,
        "Resolved generation paths"
    );
    let config = load_config(&cli.input)?;
    let model = load_model(&cli.input)?;
    let engine = match &cli.templates {
        Some(dir) => TemplateEngine::with_overrides(dir)?,
        None => TemplateEngine::builtin()?,
    };

    output::header(format!(
        "Generating {} entities from {}",
        model.entities().len(),
        cli.input.display()
    ));
    if let Some(dir) = &cli.templates {
        output::label("Templates", dir.display());
    }
    output::label("Output", cli.output.display());

    let report = Pipeline::new(&config, &model, &engine, &cli.output).run()?;
    tracing::debug!(files = report.files.len(), "Generation finished");
    print_report(&report, cli);
    Ok(())
}

fn print_report(report: &GenerationReport, cli: &Cli) {
    if report.passes.is_empty() {
        output::warning("Every generation pass is disabled in _config.json; nothing written");
        return;
    }

    output::blank();
    for file in &report.files {
        let shown = file.strip_prefix(&cli.output).unwrap_or(file);
        output::dim(format!("  {}", shown.display()));
    }
    output::blank();

    let passes: Vec<&str> = report.passes.iter().map(|p| p.name()).collect();
    output::success(format!(
        "Wrote {} files ({})",
        report.files.len(),
        passes.join(", ")
    ));
}
