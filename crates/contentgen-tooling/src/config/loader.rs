//! Reads `_config.json` from the input directory.

use std::path::Path;

use serde_json::Value;

use super::{ConfigError, GeneratorConfig};

pub const CONFIG_FILENAME: &str = "_config.json";

/// Load and validate `_config.json` from `input_dir`.
pub fn load_config(input_dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    let path = input_dir.join(CONFIG_FILENAME);
    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        source: e,
    })?;
    let Value::Object(raw) = value else {
        return Err(ConfigError::NotAnObject { path });
    };

    let config = GeneratorConfig::from_json(raw)?;
    tracing::debug!(?path, flags = ?config.flags(), "Loaded generator config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TOOL_VERSION;
    use std::fs;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_non_object() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "[1, 2]").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject { .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let contents = format!(
            r#"{{
                "toolVersion": "{TOOL_VERSION}",
                "projectPackageId": "com.example.app",
                "generateProvider": false,
                "generateApi": false
            }}"#
        );
        fs::write(dir.path().join(CONFIG_FILENAME), contents).unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.project_package_id(), "com.example.app");
        assert!(config.provider().is_none());
        assert!(config.api().is_none());
    }
}
