//! Validation schemas for every CloudWatch Logs operation.
//!
//! Each operation has two artifacts:
//! - a typed request/response struct pair (the data contract), and
//! - a static [`ObjectShape`] describing the same fields, walked by
//!   [`crate::validation::validate`] against untyped JSON and rendered to a
//!   JSON Schema descriptor for `tools/list`.
//!
//! Request shapes reject unknown keys. Response shapes drop them, but stay
//! strict about types and enumerated values.

use serde_json::{json, Map, Value};

pub mod common;
pub mod enums;
pub mod events;
pub mod groups;
pub mod insights;
pub mod streams;

pub use common::ResponseMetadata;
pub use enums::{
    DataProtectionStatus, EntityRejectionErrorType, InheritedProperty, LogGroupClass, OrderBy,
    QueryLanguage, QueryStatus,
};

/// JSON Schema dialect advertised on every input descriptor.
pub const JSON_SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#";

// =============================================================================
// Shape model
// =============================================================================

/// Accepted JSON type for a single field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    String,
    /// JSON integer (epoch milliseconds, limits, counts, byte sizes).
    Integer,
    /// Any JSON number.
    Number,
    Boolean,
    /// String restricted to a fixed literal set.
    Enum(&'static [&'static str]),
    Array(&'static FieldType),
    /// Object with arbitrary keys and uniformly typed values.
    Map(&'static FieldType),
    Object(&'static ObjectShape),
}

impl FieldType {
    /// Human-readable type name used in validation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::String | FieldType::Enum(_) => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array(_) => "array",
            FieldType::Map(_) | FieldType::Object(_) => "object",
        }
    }

    fn json_schema(&self) -> Value {
        match self {
            FieldType::String => json!({ "type": "string" }),
            FieldType::Integer => json!({ "type": "integer" }),
            FieldType::Number => json!({ "type": "number" }),
            FieldType::Boolean => json!({ "type": "boolean" }),
            FieldType::Enum(values) => json!({ "type": "string", "enum": values }),
            FieldType::Array(inner) => json!({ "type": "array", "items": inner.json_schema() }),
            FieldType::Map(inner) => {
                json!({ "type": "object", "additionalProperties": inner.json_schema() })
            }
            FieldType::Object(shape) => shape.object_schema(),
        }
    }
}

/// A single named field of an object shape.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub description: &'static str,
}

/// Required field.
pub const fn required(name: &'static str, ty: FieldType, description: &'static str) -> Field {
    Field {
        name,
        ty,
        required: true,
        description,
    }
}

/// Optional field: absent or of the declared type, never `null`.
pub const fn optional(name: &'static str, ty: FieldType, description: &'static str) -> Field {
    Field {
        name,
        ty,
        required: false,
        description,
    }
}

/// Treatment of keys not declared by a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Report an `unrecognized_keys` issue.
    Reject,
    /// Drop silently from the normalized output.
    Strip,
}

/// Declared shape of a JSON object.
#[derive(Debug)]
pub struct ObjectShape {
    pub fields: &'static [Field],
    pub unknown_keys: UnknownKeys,
}

impl ObjectShape {
    /// Shape for caller-supplied input.
    pub const fn request(fields: &'static [Field]) -> Self {
        Self {
            fields,
            unknown_keys: UnknownKeys::Reject,
        }
    }

    /// Shape for service output.
    pub const fn response(fields: &'static [Field]) -> Self {
        Self {
            fields,
            unknown_keys: UnknownKeys::Strip,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Render as a standalone JSON Schema document (the tool `inputSchema`).
    pub fn to_json_schema(&self) -> Value {
        let mut schema = self.object_schema();
        if let Value::Object(map) = &mut schema {
            map.insert("$schema".to_string(), Value::from(JSON_SCHEMA_DIALECT));
        }
        schema
    }

    fn object_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in self.fields {
            let mut property = field.ty.json_schema();
            if let Value::Object(map) = &mut property {
                map.insert("description".to_string(), Value::from(field.description));
            }
            properties.insert(field.name.to_string(), property);
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<Value> = self
            .required_fields()
            .map(|f| Value::from(f.name))
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }

        if self.unknown_keys == UnknownKeys::Reject {
            schema.insert("additionalProperties".to_string(), Value::Bool(false));
        }
        Value::Object(schema)
    }
}

// =============================================================================
// Tests
// =============================================================================
