//! In-memory model of the entities to generate code for.
//!
//! A [`Model`] is built once by [`load_model`] and then only read by the
//! generation passes.

mod constraint;
mod entity;
mod field;
mod loader;

pub use constraint::{Constraint, QueryParam};
pub use entity::Entity;
pub use field::{Field, FieldType};
pub use loader::{load_model, HEADER_FILENAME};

use std::path::PathBuf;

/// All loaded entities plus the optional banner prepended to generated files.
#[derive(Debug, Clone, Default)]
pub struct Model {
    entities: Vec<Entity>,
    header: Option<String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name() == name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid entity definition {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("entity '{entity}': field '{field}' is an enum but has no 'enumName'")]
    EnumNameMissing { entity: String, field: String },

    #[error("entity '{entity}': enum '{enum_name}' is declared by more than one field")]
    DuplicateEnumName { entity: String, enum_name: String },
}
