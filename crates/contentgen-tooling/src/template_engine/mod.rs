//! Template rendering for the generation passes.
//!
//! Passes only see the [`TemplateRenderer`] trait: "render this named template
//! with this context". [`TemplateEngine`] is the Tera-backed implementation,
//! preloaded with the built-in templates and optionally overlaid with a
//! directory of user-supplied `.tera` files.

mod builtin;
mod engine;
mod filters;
mod loader;
mod renderer;

pub use builtin::BUILTIN_TEMPLATES;
pub use engine::{RenderError, TemplateEngine};
pub use renderer::{RenderContext, TemplateRenderer};

/// Names of the built-in templates, one per generated artifact.
pub mod names {
    pub const COLUMNS: &str = "columns.java.tera";
    pub const ABSTRACT_CURSOR: &str = "abstract_cursor.java.tera";
    pub const ABSTRACT_CONTENT_VALUES: &str = "abstract_content_values.java.tera";
    pub const ABSTRACT_SELECTION: &str = "abstract_selection.java.tera";
    pub const CURSOR: &str = "cursor.java.tera";
    pub const CONTENT_VALUES: &str = "content_values.java.tera";
    pub const SELECTION: &str = "selection.java.tera";
    pub const ENUM: &str = "enum.java.tera";
    pub const CONTENT_PROVIDER: &str = "content_provider.java.tera";
    pub const SQLITE_HELPER: &str = "sqlite_helper.java.tera";
    pub const INTENT_SERVICE: &str = "intent_service.java.tera";
    pub const REST_SERVICE: &str = "rest_service.java.tera";
    pub const MANIFEST: &str = "add_to_manifest.txt.tera";
    pub const MODEL: &str = "model.java.tera";
    pub const FRAGMENT: &str = "fragment.java.tera";
    pub const VIEW: &str = "view.java.tera";
    pub const LAYOUT: &str = "layout.xml.tera";
}
