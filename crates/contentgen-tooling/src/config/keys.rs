//! `_config.json` key names.

pub(crate) const TOOL_VERSION: &str = "toolVersion";
pub(crate) const PROJECT_PACKAGE_ID: &str = "projectPackageId";
pub(crate) const PROVIDER_JAVA_PACKAGE: &str = "providerJavaPackage";
pub(crate) const PROVIDER_CLASS_NAME: &str = "providerClassName";
pub(crate) const SQLITE_HELPER_CLASS_NAME: &str = "sqliteHelperClassName";
pub(crate) const AUTHORITY: &str = "authority";
pub(crate) const DATABASE_FILE_NAME: &str = "databaseFileName";
pub(crate) const ENABLE_FOREIGN_KEYS: &str = "enableForeignKeys";
pub(crate) const PROJECT_BASE_URL: &str = "projectBaseUrl";

pub(crate) const GENERATE_PROVIDER: &str = "generateProvider";
pub(crate) const GENERATE_MODELS: &str = "generateModels";
pub(crate) const GENERATE_VIEWS: &str = "generateViews";
pub(crate) const GENERATE_API: &str = "generateApi";
pub(crate) const GENERATE_FRAGMENTS: &str = "generateFragments";
