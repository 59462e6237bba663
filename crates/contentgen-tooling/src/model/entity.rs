//! A single data-record type, one per entity JSON file.

use heck::{ToLowerCamelCase, ToPascalCase};

use super::{Constraint, Field, QueryParam};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    url_path: Option<String>,
    fields: Vec<Field>,
    constraints: Vec<Constraint>,
    query_params: Vec<QueryParam>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_path: None,
            fields: Vec::new(),
            constraints: Vec::new(),
            query_params: Vec::new(),
        }
    }

    pub fn set_url_path(&mut self, url_path: Option<String>) {
        self.url_path = url_path;
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn add_query_param(&mut self, param: QueryParam) {
        self.query_params.push(param);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url_path(&self) -> Option<&str> {
        self.url_path.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn query_params(&self) -> &[QueryParam] {
        &self.query_params
    }

    pub fn enum_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_enum())
    }

    /// Directory name and SQL table name.
    pub fn name_lower_case(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn name_upper_case(&self) -> String {
        self.name.to_uppercase()
    }

    /// Class-name prefix of every generated file: `user_profile` -> `UserProfile`.
    pub fn name_camel_case(&self) -> String {
        self.name.to_pascal_case()
    }

    pub fn name_camel_case_lower_case(&self) -> String {
        self.name.to_lower_camel_case()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_forms() {
        let e = Entity::new("user_profile");
        assert_eq!(e.name_lower_case(), "user_profile");
        assert_eq!(e.name_upper_case(), "USER_PROFILE");
        assert_eq!(e.name_camel_case(), "UserProfile");
        assert_eq!(e.name_camel_case_lower_case(), "userProfile");

        let e = Entity::new("User");
        assert_eq!(e.name_lower_case(), "user");
        assert_eq!(e.name_camel_case(), "User");
    }

    #[test]
    fn test_accumulates_in_order() {
        let mut e = Entity::new("person");
        e.add_field(Field::new("first_name", "string"));
        e.add_field(
            Field::new("gender", "enum").with_enum(Some("Gender".into()), vec!["MALE".into()]),
        );
        e.add_constraint(Constraint::new("unique_name", "unique (first_name)"));
        e.add_query_param(QueryParam::new("page"));

        let names: Vec<_> = e.fields().iter().map(Field::name).collect();
        assert_eq!(names, vec!["first_name", "gender"]);
        assert_eq!(e.enum_fields().count(), 1);
        assert_eq!(e.constraints().len(), 1);
        assert_eq!(e.query_params().len(), 1);
        assert_eq!(e.url_path(), None);
    }
}
