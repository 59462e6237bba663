//! Runs the enabled generation passes in their fixed order.
//!
//! Passes do not consume each other's output; they only share the model and
//! configuration loaded up front. Order is fixed so output and logs are stable.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{GenerationFlags, GeneratorConfig};
use crate::error::GeneratorError;
use crate::generators::{self, Emitter, GenerationContext};
use crate::model::Model;
use crate::template_engine::TemplateRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Columns, wrappers, content provider and SQLite helper.
    Provider,
    /// Intent service and REST service.
    Api,
    /// `__add_to_manifest.txt`.
    Manifest,
    /// View classes and layouts.
    Views,
    /// Model classes.
    Models,
    /// List fragments.
    Fragments,
}

impl Pass {
    /// Every pass, in execution order.
    pub const ALL: [Pass; 6] = [
        Pass::Provider,
        Pass::Api,
        Pass::Manifest,
        Pass::Views,
        Pass::Models,
        Pass::Fragments,
    ];

    pub fn is_enabled(self, flags: GenerationFlags) -> bool {
        match self {
            Pass::Provider => flags.provider,
            Pass::Api => flags.api,
            Pass::Manifest => flags.provider || flags.api,
            Pass::Views => flags.views,
            Pass::Models => flags.models,
            Pass::Fragments => flags.fragments,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pass::Provider => "provider",
            Pass::Api => "api",
            Pass::Manifest => "manifest",
            Pass::Views => "views",
            Pass::Models => "models",
            Pass::Fragments => "fragments",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The passes `flags` switch on, in execution order.
pub fn planned_passes(flags: GenerationFlags) -> Vec<Pass> {
    Pass::ALL
        .into_iter()
        .filter(|p| p.is_enabled(flags))
        .collect()
}

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub passes: Vec<Pass>,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

/// One generation run over an already loaded config and model.
#[derive(Debug)]
pub struct Pipeline<'a, R: TemplateRenderer + ?Sized> {
    config: &'a GeneratorConfig,
    model: &'a Model,
    renderer: &'a R,
    output_dir: &'a Path,
}

impl<'a, R: TemplateRenderer + ?Sized> Pipeline<'a, R> {
    pub fn new(
        config: &'a GeneratorConfig,
        model: &'a Model,
        renderer: &'a R,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            config,
            model,
            renderer,
            output_dir,
        }
    }

    /// Run every enabled pass. The first failure aborts the run; files
    /// already written stay on disk.
    pub fn run(&self) -> Result<GenerationReport, GeneratorError> {
        let cx = GenerationContext::new(self.config, self.model, self.output_dir)?;
        let mut out = Emitter::new(self.renderer);
        let mut report = GenerationReport::default();

        for pass in planned_passes(self.config.flags()) {
            let before = out.written().len();
            tracing::info!(pass = %pass, "Running generation pass");

            match pass {
                Pass::Provider => {
                    if let Some(provider) = self.config.provider() {
                        generators::provider::generate(&cx, provider, &mut out)?;
                    }
                }
                Pass::Api => generators::api::generate(&cx, &mut out)?,
                Pass::Manifest => generators::manifest::generate(&cx, &mut out)?,
                Pass::Views => generators::views::generate(&cx, &mut out)?,
                Pass::Models => generators::models::generate(&cx, &mut out)?,
                Pass::Fragments => generators::fragments::generate(&cx, &mut out)?,
            }

            tracing::debug!(
                pass = %pass,
                files = out.written().len() - before,
                "Finished generation pass"
            );
            report.passes.push(pass);
        }

        report.files = out.into_written();
        tracing::info!(
            entities = self.model.entities().len(),
            files = report.files.len(),
            output = ?self.output_dir,
            "Generation complete"
        );
        Ok(report)
    }
}
