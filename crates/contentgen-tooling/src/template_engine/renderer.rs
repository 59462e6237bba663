//! The rendering seam between generation passes and the template engine.

use serde::Serialize;
use serde_json::{Map, Value};

use super::RenderError;

/// Renders a named template against a context.
pub trait TemplateRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String, RenderError>;
}

impl<R: TemplateRenderer + ?Sized> TemplateRenderer for &R {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String, RenderError> {
        (**self).render(template, context)
    }
}

/// Key/value bindings visible to a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to the serialized form of `value`, replacing any previous binding.
    pub fn insert<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), RenderError> {
        let value = serde_json::to_value(value).map_err(|e| RenderError::Context {
            key: key.to_string(),
            source: e,
        })?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_replace() {
        let mut ctx = RenderContext::new();
        ctx.insert("name", "first").unwrap();
        ctx.insert("name", "second").unwrap();
        ctx.insert("count", &3).unwrap();

        assert_eq!(ctx.get("name"), Some(&json!("second")));
        assert_eq!(ctx.get("count"), Some(&json!(3)));
        assert!(!ctx.contains_key("missing"));
    }

    #[test]
    fn test_insert_none_binds_null() {
        let mut ctx = RenderContext::new();
        ctx.insert("header", &Option::<&str>::None).unwrap();
        assert_eq!(ctx.get("header"), Some(&Value::Null));
    }
}
