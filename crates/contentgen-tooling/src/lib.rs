//! Model loading, configuration validation and template-driven generation of
//! Android content provider boilerplate.
//!
//! The crate reads a directory of JSON entity definitions plus a `_config.json`,
//! builds an in-memory [`model::Model`], and renders a fixed sequence of Tera
//! templates over it into a Java source tree.
//!
//! # Modules
//!
//! - [`config`]: `_config.json` loading and validation
//! - [`model`]: entities, fields, constraints and query parameters, plus the directory loader
//! - [`template_engine`]: Tera-backed rendering behind the [`template_engine::TemplateRenderer`] trait
//! - [`context`]: serializable views of the model bound into template contexts
//! - [`generators`]: the individual generation passes
//! - [`pipeline`]: the orchestrator that runs the passes in order

pub mod config;
pub mod context;
pub mod error;
pub mod generators;
pub mod model;
pub mod pipeline;
pub mod template_engine;

pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use model::Model;
pub use pipeline::{GenerationReport, Pass, Pipeline};

/// Version string `_config.json` must declare in its `toolVersion` field.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load configuration and model from `input_dir` and run every enabled pass,
/// writing into `output_dir` with the built-in templates.
pub fn generate(
    input_dir: &std::path::Path,
    output_dir: &std::path::Path,
) -> Result<GenerationReport, GeneratorError> {
    let config = config::load_config(input_dir)?;
    let model = model::load_model(input_dir)?;
    let engine = template_engine::TemplateEngine::builtin()?;
    Pipeline::new(&config, &model, &engine, output_dir).run()
}
