//! Tera-based template rendering engine with custom filter registration.

use std::error::Error as _;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use super::builtin::BUILTIN_TEMPLATES;
use super::filters;
use super::loader::load_templates_from_dir;
use super::renderer::{RenderContext, TemplateRenderer};

/// Template engine wrapping Tera with the generator's filters registered.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// An engine holding only the templates compiled into this crate.
    pub fn builtin() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .map_err(|e| RenderError::Load {
                origin: "built-in templates".to_string(),
                detail: describe(&e),
                source: e,
            })?;
        Ok(Self::with_filters(tera))
    }

    /// Built-in templates overlaid with every `.tera` file in `template_dir`.
    ///
    /// A file named like a built-in template replaces it; other files are added
    /// and may be included from the overriding templates.
    pub fn with_overrides(template_dir: &Path) -> Result<Self, RenderError> {
        if !template_dir.is_dir() {
            return Err(RenderError::TemplateDir(template_dir.to_path_buf()));
        }
        let mut tera = load_templates_from_dir(template_dir)?;
        let builtin = Self::builtin()?;
        // Templates already in `tera` win over the built-ins.
        tera.extend(&builtin.tera).map_err(|e| RenderError::Load {
            origin: template_dir.display().to_string(),
            detail: describe(&e),
            source: e,
        })?;
        tracing::debug!(dir = ?template_dir, "Loaded template overrides");
        Ok(Self::with_filters(tera))
    }

    fn with_filters(mut tera: Tera) -> Self {
        tera.register_filter("snake_case", filters::snake_case);
        tera.register_filter("pascal_case", filters::pascal_case);
        tera.register_filter("camel_case", filters::camel_case);
        tera.register_filter("kebab_case", filters::kebab_case);
        tera.register_filter("shouty_snake_case", filters::shouty_snake_case);
        Self { tera }
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

impl TemplateRenderer for TemplateEngine {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String, RenderError> {
        let render_err = |e: tera::Error| RenderError::Render {
            template: template.to_string(),
            detail: describe(&e),
            source: e,
        };
        let context = Context::from_value(tera::Value::Object(context.as_map().clone()))
            .map_err(render_err)?;
        self.tera.render(template, &context).map_err(render_err)
    }
}

/// Tera keeps the useful part of a failure (undefined variable, line number)
/// in the source chain, so flatten it into one line.
fn describe(err: &tera::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template directory not found: {0}")]
    TemplateDir(PathBuf),

    #[error("failed to load templates from {origin}: {detail}")]
    Load {
        origin: String,
        detail: String,
        #[source]
        source: tera::Error,
    },

    #[error("render error for '{template}': {detail}")]
    Render {
        template: String,
        detail: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to bind '{key}' into the template context: {source}")]
    Context {
        key: String,
        source: serde_json::Error,
    },

    #[error("entity '{entity}': field '{field}' has unknown type '{type_token}'")]
    UnknownFieldType {
        entity: String,
        field: String,
        type_token: String,
    },
}
