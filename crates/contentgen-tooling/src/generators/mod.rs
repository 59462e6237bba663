//! Generation passes.
//!
//! Every pass follows the same shape: build a [`RenderContext`] from the shared
//! [`GenerationContext`], render a named template, and write the result to a
//! path derived from the [`OutputLayout`]. Files are written as soon as they are
//! rendered; a failure leaves earlier files in place.

pub(crate) mod api;
pub(crate) mod fragments;
pub(crate) mod manifest;
pub(crate) mod models;
pub mod paths;
pub(crate) mod provider;
pub(crate) mod views;

pub use paths::OutputLayout;

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::context::{EntityView, ModelView};
use crate::error::GeneratorError;
use crate::model::Model;
use crate::template_engine::{RenderContext, RenderError, TemplateRenderer};

/// Read-only inputs shared by every pass.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    config: &'a GeneratorConfig,
    model: ModelView<'a>,
    layout: OutputLayout,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        model: &'a Model,
        output_dir: &Path,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            config,
            model: ModelView::new(model)?,
            layout: OutputLayout::new(output_dir),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.config
    }

    pub fn entities(&self) -> &[EntityView<'a>] {
        &self.model.entities
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// `config`, `flags` and `header`, bound in every template.
    pub fn base_context(&self) -> Result<RenderContext, RenderError> {
        let mut ctx = RenderContext::new();
        ctx.insert("config", self.config.raw())?;
        ctx.insert("flags", &self.config.flags())?;
        ctx.insert("header", &self.model.header)?;
        Ok(ctx)
    }

    /// Base bindings plus the whole `model`, for cross-entity templates.
    pub fn model_context(&self) -> Result<RenderContext, RenderError> {
        let mut ctx = self.base_context()?;
        ctx.insert("model", &self.model)?;
        Ok(ctx)
    }

    /// Base bindings plus the current `entity`.
    pub fn entity_context(&self, entity: &EntityView<'_>) -> Result<RenderContext, RenderError> {
        let mut ctx = self.base_context()?;
        ctx.insert("entity", entity)?;
        Ok(ctx)
    }
}

/// Renders templates and writes them to disk, remembering what it wrote.
#[derive(Debug)]
pub struct Emitter<'r, R: TemplateRenderer + ?Sized> {
    renderer: &'r R,
    written: Vec<PathBuf>,
}

impl<'r, R: TemplateRenderer + ?Sized> Emitter<'r, R> {
    pub fn new(renderer: &'r R) -> Self {
        Self {
            renderer,
            written: Vec::new(),
        }
    }

    /// Render `template` with `context` into `path`, creating parent
    /// directories and overwriting any existing file.
    pub fn emit(
        &mut self,
        template: &str,
        context: &RenderContext,
        path: PathBuf,
    ) -> Result<(), GeneratorError> {
        let content = self.renderer.render(template, context)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }
        std::fs::write(&path, content).map_err(|e| GeneratorError::io(&path, e))?;
        tracing::debug!(template, path = ?path, "Wrote file");
        self.written.push(path);
        Ok(())
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A renderer that records calls instead of running Tera.

    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingRenderer {
        pub calls: RefCell<Vec<(String, RenderContext)>>,
    }

    impl RecordingRenderer {
        pub fn templates(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(t, _)| t.clone()).collect()
        }
    }

    impl TemplateRenderer for RecordingRenderer {
        fn render(&self, template: &str, context: &RenderContext) -> Result<String, RenderError> {
            self.calls
                .borrow_mut()
                .push((template.to_string(), context.clone()));
            Ok(format!("// {template}\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingRenderer;
    use super::*;
    use crate::model::{Entity, Field};

    fn config() -> GeneratorConfig {
        let raw = serde_json::json!({
            "toolVersion": crate::TOOL_VERSION,
            "projectPackageId": "com.example.app",
            "generateProvider": false,
            "generateApi": false
        });
        match raw {
            serde_json::Value::Object(map) => GeneratorConfig::from_json(map).unwrap(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_contexts_bind_expected_keys() {
        let config = config();
        let mut model = Model::new();
        let mut entity = Entity::new("user");
        entity.add_field(Field::new("name", "string"));
        model.add_entity(entity);

        let dir = tempfile::tempdir().unwrap();
        let cx = GenerationContext::new(&config, &model, dir.path()).unwrap();

        let base = cx.base_context().unwrap();
        assert_eq!(base.get("header"), Some(&serde_json::Value::Null));
        assert_eq!(
            base.get("config").unwrap()["projectPackageId"],
            "com.example.app"
        );
        assert_eq!(base.get("flags").unwrap()["provider"], false);
        assert!(!base.contains_key("model"));

        let model_ctx = cx.model_context().unwrap();
        assert_eq!(model_ctx.get("model").unwrap()["entities"][0]["name"], "user");

        let entity_ctx = cx.entity_context(&cx.entities()[0]).unwrap();
        assert_eq!(entity_ctx.get("entity").unwrap()["name_camel_case"], "User");
    }

    #[test]
    fn test_emitter_creates_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/Out.java");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();

        let renderer = RecordingRenderer::default();
        let mut emitter = Emitter::new(&renderer);
        emitter
            .emit("columns.java.tera", &RenderContext::new(), path.clone())
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "// columns.java.tera\n"
        );
        assert_eq!(emitter.written(), [path]);
    }

    #[test]
    fn test_emitter_propagates_render_errors() {
        struct Failing;
        impl TemplateRenderer for Failing {
            fn render(&self, template: &str, _: &RenderContext) -> Result<String, RenderError> {
                Err(RenderError::UnknownFieldType {
                    entity: "e".into(),
                    field: "f".into(),
                    type_token: template.into(),
                })
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never/Written.java");
        let mut emitter = Emitter::new(&Failing);
        let err = emitter
            .emit("x.tera", &RenderContext::new(), path.clone())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Render(_)));
        assert!(!path.exists());
        assert!(emitter.written().is_empty());
    }
}
