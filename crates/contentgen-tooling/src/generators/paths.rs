//! Where each generated file goes under the output directory.

use std::path::{Path, PathBuf};

const BASE_DIR: &str = "base";
const API_DIR: &str = "api";
const MODEL_DIR: &str = "model";
const FRAGMENT_DIR: &str = "fragment";
const MANIFEST_FILENAME: &str = "__add_to_manifest.txt";

/// Java-style package to relative path: `com.example.app` -> `com/example/app`.
pub fn package_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn package_dir(&self, package: &str) -> PathBuf {
        self.root.join(package_path(package))
    }

    /// Shared `Abstract*` classes of the provider package.
    pub fn provider_base_dir(&self, provider_package: &str) -> PathBuf {
        self.package_dir(provider_package).join(BASE_DIR)
    }

    /// Per-entity subpackage of the provider package, named by the lower-case entity name.
    pub fn entity_dir(&self, provider_package: &str, entity_lower_case: &str) -> PathBuf {
        self.package_dir(provider_package).join(entity_lower_case)
    }

    pub fn api_dir(&self, project_package: &str) -> PathBuf {
        self.package_dir(project_package).join(API_DIR)
    }

    pub fn model_dir(&self, project_package: &str) -> PathBuf {
        self.package_dir(project_package).join(MODEL_DIR)
    }

    pub fn fragment_dir(&self, project_package: &str) -> PathBuf {
        self.package_dir(project_package).join(FRAGMENT_DIR)
    }

    pub fn view_dir(&self, project_package: &str) -> PathBuf {
        self.package_dir(project_package).join("ui").join("viewmodel")
    }

    /// Android layout resources live outside the Java tree.
    pub fn layout_dir(&self) -> PathBuf {
        self.root.join("res").join("layout")
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.root.join(MANIFEST_FILENAME)
    }
}
