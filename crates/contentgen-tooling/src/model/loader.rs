//! Loads entity definition files (`<name>.json`) and the optional
//! `header.txt` banner from the input directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Constraint, Entity, Field, FieldType, Model, ModelError, QueryParam};

pub const HEADER_FILENAME: &str = "header.txt";

const ENTITY_EXTENSION: &str = ".json";
const IGNORED_PREFIX: char = '_';

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityDocument {
    #[serde(default, deserialize_with = "non_empty_text")]
    url_path: Option<String>,
    fields: Vec<FieldDocument>,
    #[serde(default)]
    constraints: Vec<ConstraintDocument>,
    #[serde(default)]
    query_params: Vec<QueryParamDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldDocument {
    name: String,
    #[serde(default, deserialize_with = "non_empty_text")]
    serialized_name: Option<String>,
    #[serde(rename = "type")]
    type_token: String,
    #[serde(default)]
    index: bool,
    #[serde(default = "default_nullable")]
    nullable: bool,
    #[serde(default, deserialize_with = "non_empty_text")]
    default_value: Option<String>,
    #[serde(default, deserialize_with = "non_empty_text")]
    enum_name: Option<String>,
    #[serde(default)]
    enum_values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ConstraintDocument {
    name: String,
    definition: String,
}

#[derive(Debug, Deserialize)]
struct QueryParamDocument {
    name: String,
}

fn default_nullable() -> bool {
    true
}

/// Optional text values: strings, numbers and booleans are kept as text,
/// empty strings and `null` count as absent.
fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a string, number or boolean, found {other}"
            )))
        }
    };
    Ok(text.filter(|s| !s.is_empty()))
}

/// Load every entity file in `input_dir` plus the optional header.
///
/// Entity files are processed in lexicographic file-name order so repeated
/// runs produce identical output. A single malformed file fails the load.
pub fn load_model(input_dir: &Path) -> Result<Model, ModelError> {
    let mut model = Model::new();

    for path in entity_files(input_dir)? {
        let entity = load_entity(&path)?;
        tracing::debug!(
            entity = entity.name(),
            fields = entity.fields().len(),
            constraints = entity.constraints().len(),
            query_params = entity.query_params().len(),
            "Loaded entity"
        );
        model.add_entity(entity);
    }

    let header_path = input_dir.join(HEADER_FILENAME);
    if header_path.is_file() {
        let header = std::fs::read_to_string(&header_path).map_err(|e| ModelError::Io {
            path: header_path.clone(),
            source: e,
        })?;
        model.set_header(header.trim());
        tracing::debug!(path = ?header_path, "Loaded header");
    }

    Ok(model)
}

/// `*.json` regular files not starting with `_`, sorted by file name.
fn entity_files(input_dir: &Path) -> Result<Vec<PathBuf>, ModelError> {
    let io_err = |e| ModelError::Io {
        path: input_dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::debug!(path = ?entry.path(), "Skipping file with non UTF-8 name");
            continue;
        };
        if name.starts_with(IGNORED_PREFIX) || !name.ends_with(ENTITY_EXTENSION) {
            continue;
        }
        if !entry.path().is_file() {
            continue;
        }
        files.push(entry.path());
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn load_entity(path: &Path) -> Result<Entity, ModelError> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!(?path, entity = %name, "Reading entity file");

    let contents = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc: EntityDocument = serde_json::from_str(&contents).map_err(|e| ModelError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut entity = Entity::new(name);
    entity.set_url_path(doc.url_path);

    for field in doc.fields {
        let declares_enum = !field.enum_values.is_empty()
            || FieldType::parse(&field.type_token) == Some(FieldType::Enum);
        if declares_enum && field.enum_name.is_none() {
            return Err(ModelError::EnumNameMissing {
                entity: entity.name().to_string(),
                field: field.name,
            });
        }
        if let Some(enum_name) = field.enum_name.as_deref() {
            if entity.enum_fields().any(|f| f.enum_name() == Some(enum_name)) {
                return Err(ModelError::DuplicateEnumName {
                    entity: entity.name().to_string(),
                    enum_name: enum_name.to_string(),
                });
            }
        }
        tracing::debug!(
            entity = entity.name(),
            field = %field.name,
            field_type = %field.type_token,
            "Parsed field"
        );
        entity.add_field(
            Field::new(field.name, field.type_token)
                .with_serialized_name(field.serialized_name)
                .with_index(field.index)
                .with_nullable(field.nullable)
                .with_default_value(field.default_value)
                .with_enum(field.enum_name, field.enum_values),
        );
    }

    for constraint in doc.constraints {
        entity.add_constraint(Constraint::new(&constraint.name, &constraint.definition));
    }

    for param in doc.query_params {
        entity.add_query_param(QueryParam::new(&param.name));
    }

    Ok(entity)
}
