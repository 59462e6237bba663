//! Structural validation of the `_config.json` object.

use serde_json::{Map, Value};

use super::keys;
use super::{
    ApiSettings, ConfigError, GenerationFlags, GeneratorConfig, ProviderSettings,
    DEFAULT_GENERATE_API, DEFAULT_GENERATE_FRAGMENTS, DEFAULT_GENERATE_MODELS,
    DEFAULT_GENERATE_PROVIDER, DEFAULT_GENERATE_VIEWS,
};
use crate::TOOL_VERSION;

pub(super) fn validate(mut raw: Map<String, Value>) -> Result<GeneratorConfig, ConfigError> {
    ensure_tool_version(&raw, TOOL_VERSION)?;

    let flags = GenerationFlags {
        provider: optional_bool(&raw, keys::GENERATE_PROVIDER, DEFAULT_GENERATE_PROVIDER)?,
        api: optional_bool(&raw, keys::GENERATE_API, DEFAULT_GENERATE_API)?,
        views: optional_bool(&raw, keys::GENERATE_VIEWS, DEFAULT_GENERATE_VIEWS)?,
        models: optional_bool(&raw, keys::GENERATE_MODELS, DEFAULT_GENERATE_MODELS)?,
        fragments: optional_bool(&raw, keys::GENERATE_FRAGMENTS, DEFAULT_GENERATE_FRAGMENTS)?,
    };

    let provider = if flags.provider {
        Some(ProviderSettings {
            java_package: require_string(&raw, keys::PROVIDER_JAVA_PACKAGE)?,
            class_name: require_string(&raw, keys::PROVIDER_CLASS_NAME)?,
            sqlite_helper_class_name: require_string(&raw, keys::SQLITE_HELPER_CLASS_NAME)?,
            authority: require_string(&raw, keys::AUTHORITY)?,
            database_file_name: require_string(&raw, keys::DATABASE_FILE_NAME)?,
            enable_foreign_keys: require_bool(&raw, keys::ENABLE_FOREIGN_KEYS)?,
        })
    } else {
        None
    };

    let api = if flags.api {
        Some(ApiSettings {
            project_base_url: require_string(&raw, keys::PROJECT_BASE_URL)?,
        })
    } else {
        None
    };

    let project_package_id = require_string(&raw, keys::PROJECT_PACKAGE_ID)?;
    normalize_bools(&mut raw);

    Ok(GeneratorConfig {
        raw,
        project_package_id,
        provider,
        api,
        flags,
    })
}

/// Input files must target exactly this build of the tool; no semver ranges.
fn ensure_tool_version(raw: &Map<String, Value>, expected: &str) -> Result<(), ConfigError> {
    let found = raw
        .get(keys::TOOL_VERSION)
        .and_then(Value::as_str)
        .ok_or_else(|| ConfigError::MissingToolVersion {
            expected: expected.to_string(),
        })?;
    if found != expected {
        return Err(ConfigError::VersionMismatch {
            found: found.to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(())
}

fn require_string(raw: &Map<String, Value>, field: &'static str) -> Result<String, ConfigError> {
    raw.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ConfigError::MissingField {
            field,
            expected: "string",
        })
}

/// A JSON boolean, or the strings `"true"` / `"false"` in any case.
fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Rewrite string-spelled booleans as JSON booleans so templates see the
/// values the validator accepted.
fn normalize_bools(raw: &mut Map<String, Value>) {
    for key in [
        keys::ENABLE_FOREIGN_KEYS,
        keys::GENERATE_PROVIDER,
        keys::GENERATE_API,
        keys::GENERATE_VIEWS,
        keys::GENERATE_MODELS,
        keys::GENERATE_FRAGMENTS,
    ] {
        if let Some(value) = raw.get_mut(key) {
            if let Some(flag) = as_flag(value) {
                *value = Value::Bool(flag);
            }
        }
    }
}

fn require_bool(raw: &Map<String, Value>, field: &'static str) -> Result<bool, ConfigError> {
    raw.get(field)
        .and_then(as_flag)
        .ok_or(ConfigError::MissingField {
            field,
            expected: "boolean",
        })
}

fn optional_bool(
    raw: &Map<String, Value>,
    field: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => as_flag(value).ok_or(ConfigError::InvalidField {
            field,
            expected: "boolean",
        }),
    }
}
