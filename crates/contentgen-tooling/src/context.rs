//! Serializable views of the model, shaped for the templates.
//!
//! Templates never see the model types directly. Each view carries the name
//! forms and resolved Java/SQLite types the templates need, so template code
//! stays free of case conversion and type mapping.

use serde::Serialize;

use crate::model::{Constraint, Entity, Field, FieldType, Model, QueryParam};
use crate::template_engine::RenderError;

/// The whole model: bound as `model` for cross-entity templates.
#[derive(Debug, Clone, Serialize)]
pub struct ModelView<'a> {
    pub header: Option<&'a str>,
    pub entities: Vec<EntityView<'a>>,
}

impl<'a> ModelView<'a> {
    pub fn new(model: &'a Model) -> Result<Self, RenderError> {
        let entities = model
            .entities()
            .iter()
            .map(EntityView::new)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            header: model.header(),
            entities,
        })
    }
}

/// One entity: bound as `entity` in per-entity templates.
#[derive(Debug, Clone, Serialize)]
pub struct EntityView<'a> {
    pub name: &'a str,
    pub name_lower_case: String,
    pub name_upper_case: String,
    pub name_camel_case: String,
    pub name_camel_case_lower_case: String,
    pub url_path: Option<&'a str>,
    pub fields: Vec<FieldView<'a>>,
    pub constraints: Vec<ConstraintView>,
    pub query_params: Vec<QueryParamView>,
    pub has_enums: bool,
    pub has_dates: bool,
}

impl<'a> EntityView<'a> {
    pub fn new(entity: &'a Entity) -> Result<Self, RenderError> {
        let fields: Vec<FieldView<'a>> = entity
            .fields()
            .iter()
            .map(|f| FieldView::new(entity, f))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            name: entity.name(),
            name_lower_case: entity.name_lower_case(),
            name_upper_case: entity.name_upper_case(),
            name_camel_case: entity.name_camel_case(),
            name_camel_case_lower_case: entity.name_camel_case_lower_case(),
            url_path: entity.url_path(),
            has_enums: fields.iter().any(|f| f.is_enum),
            has_dates: fields.iter().any(|f| f.field_type == FieldType::Date.to_string()),
            fields,
            constraints: entity.constraints().iter().map(ConstraintView::from).collect(),
            query_params: entity.query_params().iter().map(QueryParamView::from).collect(),
        })
    }
}

/// One field: bound as `field` in the enum template and nested in [`EntityView`].
#[derive(Debug, Clone, Serialize)]
pub struct FieldView<'a> {
    pub name: &'a str,
    pub name_lower_case: String,
    pub name_upper_case: String,
    pub name_camel_case: String,
    pub name_camel_case_lower_case: String,
    pub serialized_name: &'a str,
    /// The token as written in the entity file.
    pub type_token: &'a str,
    /// Canonical lower-case type name, e.g. `long` or `byte[]`.
    pub field_type: String,
    /// Type of getters and setters: boxed when nullable, primitive otherwise.
    pub java_type: String,
    pub java_type_boxed: String,
    pub sqlite_type: &'static str,
    pub cursor_getter: &'static str,
    pub is_index: bool,
    pub is_nullable: bool,
    pub is_enum: bool,
    pub default_value: Option<&'a str>,
    pub enum_name: Option<&'a str>,
    pub enum_values: &'a [String],
}

impl<'a> FieldView<'a> {
    pub fn new(entity: &Entity, field: &'a Field) -> Result<Self, RenderError> {
        let field_type = field
            .field_type()
            .ok_or_else(|| RenderError::UnknownFieldType {
                entity: entity.name().to_string(),
                field: field.name().to_string(),
                type_token: field.type_token().to_string(),
            })?;

        let (java_type, java_type_boxed) = match field.enum_name() {
            Some(enum_name) => (enum_name.to_string(), enum_name.to_string()),
            None if field.is_nullable() => {
                (field_type.java_type().to_string(), field_type.java_type().to_string())
            }
            None => (
                field_type.java_type_primitive().to_string(),
                field_type.java_type().to_string(),
            ),
        };

        Ok(Self {
            name: field.name(),
            name_lower_case: field.name_lower_case(),
            name_upper_case: field.name_upper_case(),
            name_camel_case: field.name_camel_case(),
            name_camel_case_lower_case: field.name_camel_case_lower_case(),
            serialized_name: field.serialized_name(),
            type_token: field.type_token(),
            field_type: field_type.to_string(),
            java_type,
            java_type_boxed,
            sqlite_type: field_type.sqlite_type(),
            cursor_getter: field_type.cursor_getter(),
            is_index: field.is_index(),
            is_nullable: field.is_nullable(),
            is_enum: field.is_enum(),
            default_value: field.default_value(),
            enum_name: field.enum_name(),
            enum_values: field.enum_values(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstraintView {
    pub name: String,
    pub definition: String,
}

impl From<&Constraint> for ConstraintView {
    fn from(c: &Constraint) -> Self {
        Self {
            name: c.name_upper_case(),
            definition: c.definition_upper_case(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryParamView {
    pub name: String,
    pub name_lower_case: String,
}

impl From<&QueryParam> for QueryParamView {
    fn from(p: &QueryParam) -> Self {
        Self {
            name: p.name_upper_case(),
            name_lower_case: p.name_lower_case().to_string(),
        }
    }
}
