//! Entity fields and their type tokens.

use std::fmt;

use heck::{ToLowerCamelCase, ToPascalCase};

/// One column of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    serialized_name: Option<String>,
    type_token: String,
    is_index: bool,
    is_nullable: bool,
    default_value: Option<String>,
    enum_name: Option<String>,
    enum_values: Vec<String>,
}

impl Field {
    /// A nullable, non-indexed field with no default.
    pub fn new(name: impl Into<String>, type_token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serialized_name: None,
            type_token: type_token.into(),
            is_index: false,
            is_nullable: true,
            default_value: None,
            enum_name: None,
            enum_values: Vec::new(),
        }
    }

    pub fn with_serialized_name(mut self, serialized_name: Option<String>) -> Self {
        self.serialized_name = serialized_name;
        self
    }

    pub fn with_index(mut self, is_index: bool) -> Self {
        self.is_index = is_index;
        self
    }

    pub fn with_nullable(mut self, is_nullable: bool) -> Self {
        self.is_nullable = is_nullable;
        self
    }

    pub fn with_default_value(mut self, default_value: Option<String>) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn with_enum(mut self, enum_name: Option<String>, enum_values: Vec<String>) -> Self {
        self.enum_name = enum_name;
        self.enum_values = enum_values;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wire name used by the REST layer; falls back to [`Field::name`].
    pub fn serialized_name(&self) -> &str {
        self.serialized_name.as_deref().unwrap_or(&self.name)
    }

    pub fn type_token(&self) -> &str {
        &self.type_token
    }

    /// The known type this field's token resolves to, if any.
    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::parse(&self.type_token)
    }

    pub fn is_index(&self) -> bool {
        self.is_index
    }

    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn enum_name(&self) -> Option<&str> {
        self.enum_name.as_deref()
    }

    pub fn enum_values(&self) -> &[String] {
        &self.enum_values
    }

    pub fn is_enum(&self) -> bool {
        self.enum_name.is_some()
    }

    pub fn name_lower_case(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn name_upper_case(&self) -> String {
        self.name.to_uppercase()
    }

    /// `first_name` -> `FirstName`.
    pub fn name_camel_case(&self) -> String {
        self.name.to_pascal_case()
    }

    /// `first_name` -> `firstName`.
    pub fn name_camel_case_lower_case(&self) -> String {
        self.name.to_lower_camel_case()
    }
}

/// Field types the built-in templates know how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    ByteArray,
    Enum,
}

impl FieldType {
    /// Case-insensitive lookup of a type token.
    pub fn parse(token: &str) -> Option<Self> {
        let t = match token.trim().to_ascii_lowercase().as_str() {
            "string" | "text" => Self::String,
            "integer" | "int" => Self::Integer,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "boolean" | "bool" => Self::Boolean,
            "date" => Self::Date,
            "byte[]" | "bytes" | "blob" => Self::ByteArray,
            "enum" => Self::Enum,
            _ => return None,
        };
        Some(t)
    }

    /// Boxed Java type, used for nullable columns and in `Cursor` getters.
    /// Enums resolve to their generated class name elsewhere.
    pub fn java_type(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::ByteArray => "byte[]",
            Self::Enum => "Integer",
        }
    }

    /// Primitive Java type for non-nullable columns where one exists.
    pub fn java_type_primitive(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            other => other.java_type(),
        }
    }

    /// SQLite storage class of the column.
    pub fn sqlite_type(self) -> &'static str {
        match self {
            Self::String => "TEXT",
            Self::Integer | Self::Long | Self::Boolean | Self::Date | Self::Enum => "INTEGER",
            Self::Float | Self::Double => "REAL",
            Self::ByteArray => "BLOB",
        }
    }

    /// Name of the `android.database.Cursor` getter reading this type.
    pub fn cursor_getter(self) -> &'static str {
        match self {
            Self::String => "getString",
            Self::Integer | Self::Boolean | Self::Enum => "getInt",
            Self::Long | Self::Date => "getLong",
            Self::Float => "getFloat",
            Self::Double => "getDouble",
            Self::ByteArray => "getBlob",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::ByteArray => "byte[]",
            Self::Enum => "enum",
        };
        write!(f, "{s}")
    }
}
