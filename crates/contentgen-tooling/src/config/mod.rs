//! Generator configuration loaded from `_config.json`.
//!
//! The raw JSON object is retained and bound into every template context as
//! `config`; the typed accessors cover what the passes themselves need.

pub(crate) mod keys;
mod loader;
mod validator;

pub use loader::{load_config, CONFIG_FILENAME};

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

pub(crate) const DEFAULT_GENERATE_PROVIDER: bool = true;
pub(crate) const DEFAULT_GENERATE_API: bool = true;
pub(crate) const DEFAULT_GENERATE_VIEWS: bool = true;
pub(crate) const DEFAULT_GENERATE_MODELS: bool = true;
pub(crate) const DEFAULT_GENERATE_FRAGMENTS: bool = false;

/// Settings required by the content provider pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub java_package: String,
    pub class_name: String,
    pub sqlite_helper_class_name: String,
    pub authority: String,
    pub database_file_name: String,
    pub enable_foreign_keys: bool,
}

/// Settings required by the API pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub project_base_url: String,
}

/// Which optional passes are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationFlags {
    pub provider: bool,
    pub api: bool,
    pub views: bool,
    pub models: bool,
    pub fragments: bool,
}

impl Default for GenerationFlags {
    fn default() -> Self {
        Self {
            provider: DEFAULT_GENERATE_PROVIDER,
            api: DEFAULT_GENERATE_API,
            views: DEFAULT_GENERATE_VIEWS,
            models: DEFAULT_GENERATE_MODELS,
            fragments: DEFAULT_GENERATE_FRAGMENTS,
        }
    }
}

/// Validated, immutable configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    raw: Map<String, Value>,
    project_package_id: String,
    provider: Option<ProviderSettings>,
    api: Option<ApiSettings>,
    flags: GenerationFlags,
}

impl GeneratorConfig {
    /// Validate a parsed `_config.json` object.
    pub fn from_json(raw: Map<String, Value>) -> Result<Self, ConfigError> {
        validator::validate(raw)
    }

    /// The config object as written, for template contexts.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn project_package_id(&self) -> &str {
        &self.project_package_id
    }

    /// Present only when provider generation is enabled.
    pub fn provider(&self) -> Option<&ProviderSettings> {
        self.provider.as_ref()
    }

    /// Present only when API generation is enabled.
    pub fn api(&self) -> Option<&ApiSettings> {
        self.api.as_ref()
    }

    pub fn flags(&self) -> GenerationFlags {
        self.flags
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path} must contain a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("Could not find 'toolVersion' field in _config.json, which is mandatory and must be equal to '{expected}'.")]
    MissingToolVersion { expected: String },

    #[error("Invalid 'toolVersion' value in _config.json: found '{found}' but expected '{expected}'.")]
    VersionMismatch { found: String, expected: String },

    #[error("Could not find '{field}' field in _config.json, which is mandatory and must be a {expected}.")]
    MissingField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid '{field}' value in _config.json: expected a {expected}.")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}
