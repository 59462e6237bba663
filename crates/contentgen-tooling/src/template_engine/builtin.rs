//! Templates compiled into the crate from `templates/`.

use super::names;

/// Shared banner partial, included by every Java template.
pub(crate) const HEADER_PARTIAL: &str = "header.java.tera";

macro_rules! builtin {
    ($name:expr, $file:literal) => {
        ($name, include_str!(concat!("../../templates/", $file)))
    };
}

/// `(name, source)` for every built-in template.
pub static BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    builtin!(HEADER_PARTIAL, "header.java.tera"),
    builtin!(names::COLUMNS, "columns.java.tera"),
    builtin!(names::ABSTRACT_CURSOR, "abstract_cursor.java.tera"),
    builtin!(names::ABSTRACT_CONTENT_VALUES, "abstract_content_values.java.tera"),
    builtin!(names::ABSTRACT_SELECTION, "abstract_selection.java.tera"),
    builtin!(names::CURSOR, "cursor.java.tera"),
    builtin!(names::CONTENT_VALUES, "content_values.java.tera"),
    builtin!(names::SELECTION, "selection.java.tera"),
    builtin!(names::ENUM, "enum.java.tera"),
    builtin!(names::CONTENT_PROVIDER, "content_provider.java.tera"),
    builtin!(names::SQLITE_HELPER, "sqlite_helper.java.tera"),
    builtin!(names::INTENT_SERVICE, "intent_service.java.tera"),
    builtin!(names::REST_SERVICE, "rest_service.java.tera"),
    builtin!(names::MANIFEST, "add_to_manifest.txt.tera"),
    builtin!(names::MODEL, "model.java.tera"),
    builtin!(names::FRAGMENT, "fragment.java.tera"),
    builtin!(names::VIEW, "view.java.tera"),
    builtin!(names::LAYOUT, "layout.xml.tera"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = BUILTIN_TEMPLATES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn test_sources_are_not_empty() {
        for (name, source) in BUILTIN_TEMPLATES {
            assert!(!source.trim().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn test_java_templates_include_header() {
        for (name, source) in BUILTIN_TEMPLATES {
            if name.ends_with(".java.tera") && *name != HEADER_PARTIAL {
                assert!(source.contains(HEADER_PARTIAL), "{name} lacks the header");
            }
        }
    }
}
