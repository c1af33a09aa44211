//! Shape validation for untyped JSON.
//!
//! Walks a [`ObjectShape`] against a `serde_json::Value`, collecting every
//! violation instead of stopping at the first one, and returns the normalized
//! value (declared fields only, in declaration order) when nothing is wrong.

use crate::schema::{FieldType, ObjectShape, UnknownKeys};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Category of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Missing required field or wrong JSON type.
    InvalidType,
    /// String outside the declared literal set.
    InvalidEnumValue,
    /// Keys not declared by a request shape.
    UnrecognizedKeys,
}

impl IssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::InvalidEnumValue => "invalid_enum_value",
            IssueCode::UnrecognizedKeys => "unrecognized_keys",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated constraint, located by its field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub code: IssueCode,
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }

    /// Dotted path, e.g. `logEvents.0.timestamp`. Empty for the root object.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.dotted_path(), self.message)
    }
}

/// Join issues as `[code] path: message; [code] path: message`.
pub fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(Issue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate `value` against `shape`.
///
/// Returns the normalized value, or every issue found.
pub fn validate(shape: &ObjectShape, value: &Value) -> Result<Value, Vec<Issue>> {
    let mut issues = Vec::new();
    let mut path = Vec::new();
    let normalized = check_object(shape, value, &mut path, &mut issues);

    match normalized {
        Some(value) if issues.is_empty() => Ok(value),
        _ => Err(issues),
    }
}

fn check_object(
    shape: &ObjectShape,
    value: &Value,
    path: &mut Vec<String>,
    issues: &mut Vec<Issue>,
) -> Option<Value> {
    let Some(map) = value.as_object() else {
        issues.push(type_issue(path, "object", value));
        return None;
    };

    let mut out = Map::new();
    let mut complete = true;

    for field in shape.fields {
        match map.get(field.name) {
            None => {
                if field.required {
                    path.push(field.name.to_string());
                    issues.push(Issue::new(IssueCode::InvalidType, path.clone(), "Required"));
                    path.pop();
                    complete = false;
                }
            }
            Some(v) => {
                path.push(field.name.to_string());
                match check_type(&field.ty, v, path, issues) {
                    Some(normalized) => {
                        out.insert(field.name.to_string(), normalized);
                    }
                    None => complete = false,
                }
                path.pop();
            }
        }
    }

    if shape.unknown_keys == UnknownKeys::Reject {
        let unknown: Vec<String> = map
            .keys()
            .filter(|key| shape.field(key).is_none())
            .map(|key| format!("'{}'", key))
            .collect();
        if !unknown.is_empty() {
            issues.push(Issue::new(
                IssueCode::UnrecognizedKeys,
                path.clone(),
                format!("Unrecognized key(s) in object: {}", unknown.join(", ")),
            ));
            complete = false;
        }
    }

    complete.then_some(Value::Object(out))
}

fn check_type(
    ty: &FieldType,
    value: &Value,
    path: &mut Vec<String>,
    issues: &mut Vec<Issue>,
) -> Option<Value> {
    let accepted = match ty {
        FieldType::String => value.is_string(),
        FieldType::Integer => match integral(value) {
            Some(n) => return Some(Value::from(n)),
            None => false,
        },
        FieldType::Number => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Enum(variants) => {
            let Some(s) = value.as_str() else {
                issues.push(type_issue(path, "string", value));
                return None;
            };
            if !variants.contains(&s) {
                let expected: Vec<String> = variants.iter().map(|v| format!("'{}'", v)).collect();
                issues.push(Issue::new(
                    IssueCode::InvalidEnumValue,
                    path.clone(),
                    format!(
                        "Invalid enum value. Expected {}, received '{}'",
                        expected.join(" | "),
                        s
                    ),
                ));
                return None;
            }
            true
        }
        FieldType::Array(inner) => {
            let Some(items) = value.as_array() else {
                issues.push(type_issue(path, "array", value));
                return None;
            };
            let mut out = Vec::with_capacity(items.len());
            let mut complete = true;
            for (i, item) in items.iter().enumerate() {
                path.push(i.to_string());
                match check_type(inner, item, path, issues) {
                    Some(v) => out.push(v),
                    None => complete = false,
                }
                path.pop();
            }
            return complete.then_some(Value::Array(out));
        }
        FieldType::Map(inner) => {
            let Some(entries) = value.as_object() else {
                issues.push(type_issue(path, "object", value));
                return None;
            };
            let mut out = Map::new();
            let mut complete = true;
            for (key, item) in entries {
                path.push(key.clone());
                match check_type(inner, item, path, issues) {
                    Some(v) => {
                        out.insert(key.clone(), v);
                    }
                    None => complete = false,
                }
                path.pop();
            }
            return complete.then_some(Value::Object(out));
        }
        FieldType::Object(shape) => return check_object(shape, value, path, issues),
    };

    if accepted {
        Some(value.clone())
    } else {
        issues.push(type_issue(path, ty.display_name(), value));
        None
    }
}

/// Integer value of a JSON number, including float spellings like `10.0`
/// and `1.7e12`. Fractions and values outside `i64` are `None`.
fn integral(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

fn type_issue(path: &[String], expected: &str, value: &Value) -> Issue {
    Issue::new(
        IssueCode::InvalidType,
        path.to_vec(),
        format!("Expected {}, received {}", expected, value_type_name(value)),
    )
}

fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Tests
// =============================================================================
