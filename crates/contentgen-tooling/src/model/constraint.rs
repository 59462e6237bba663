//! Named table constraints and query parameters.
//!
//! Both are stored lower-case and handed out upper-cased, so the casing used in
//! the entity file never leaks into generated SQL.

/// A named database-level rule such as `UNIQUE (...)` attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    name: String,
    definition: String,
}

impl Constraint {
    pub fn new(name: &str, definition: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            definition: definition.to_lowercase(),
        }
    }

    pub fn name_upper_case(&self) -> String {
        self.name.to_uppercase()
    }

    pub fn definition_upper_case(&self) -> String {
        self.definition.to_uppercase()
    }
}

/// A parameter accepted by the generated query/selection code of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    name: String,
}

impl QueryParam {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
        }
    }

    pub fn name_lower_case(&self) -> &str {
        &self.name
    }

    pub fn name_upper_case(&self) -> String {
        self.name.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_normalizes_case() {
        let c = Constraint::new("Unique_Name", "Unique (Name) On Conflict Replace");
        assert_eq!(c.name_upper_case(), "UNIQUE_NAME");
        assert_eq!(
            c.definition_upper_case(),
            "UNIQUE (NAME) ON CONFLICT REPLACE"
        );
        assert_eq!(c, Constraint::new("UNIQUE_NAME", "unique (name) on conflict replace"));
    }

    #[test]
    fn test_query_param_normalizes_case() {
        let p = QueryParam::new("PageSize");
        assert_eq!(p.name_lower_case(), "pagesize");
        assert_eq!(p.name_upper_case(), "PAGESIZE");
    }
}
