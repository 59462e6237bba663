//! Load `.tera` template files from a user-supplied template directory.

use std::path::Path;

use tera::Tera;

use super::engine::RenderError;

/// Load all `.tera` files from a template directory into a Tera instance.
///
/// The templates are registered by their filename (e.g., `columns.java.tera`).
pub(crate) fn load_templates_from_dir(template_dir: &Path) -> Result<Tera, RenderError> {
    let glob_pattern = template_dir.join("*.tera").to_string_lossy().to_string();

    Tera::new(&glob_pattern).map_err(|e| RenderError::Load {
        origin: template_dir.display().to_string(),
        detail: e.to_string(),
        source: e,
    })
}
