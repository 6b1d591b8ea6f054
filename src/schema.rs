//! Structural argument schemas for adapted tools.
//!
//! A schema is a plain value object: an ordered list of fields assembled once
//! by the adapter and consumed downstream for argument validation and for
//! rendering a JSON Schema the inference API understands.

use crate::types::ParamType;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// A single named field of an argument schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: ParamType,
    pub required: bool,
    pub description: String,
}

/// Ordered, named collection of schema fields. An empty schema is still a
/// valid schema; every operation here works uniformly for zero fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgsSchema {
    /// Schema name, derived from the owning tool's name.
    pub name: String,
    /// Fields in the callable's parameter declaration order.
    pub fields: Vec<SchemaField>,
}

/// A validation failure against an [`ArgsSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("arguments for '{schema}' must be a JSON object")]
    NotAnObject { schema: String },

    #[error("missing required argument '{field}'")]
    MissingField { field: String },

    #[error("argument '{field}' expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: ParamType,
        actual: String,
    },
}

impl ArgsSchema {
    /// Create a schema with no fields.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Render the schema as an object-typed JSON Schema value.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for field in &self.fields {
            let mut prop = serde_json::Map::new();
            if field.type_tag != ParamType::Any {
                prop.insert("type".into(), json!(field.type_tag));
            }
            prop.insert("description".into(), json!(field.description));
            properties.insert(field.name.clone(), Value::Object(prop));
            if field.required {
                required.push(json!(field.name));
            }
        }
        json!({
            "title": self.name,
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Check an argument object against the schema: it must be a JSON object,
    /// carry every required field, and each present field must match its
    /// declared type tag.
    pub fn validate(&self, args: &Value) -> Result<(), SchemaViolation> {
        let map = args.as_object().ok_or_else(|| SchemaViolation::NotAnObject {
            schema: self.name.clone(),
        })?;

        for field in &self.fields {
            match map.get(&field.name) {
                None if field.required => {
                    return Err(SchemaViolation::MissingField {
                        field: field.name.clone(),
                    });
                }
                None => {}
                Some(value) => {
                    if !type_matches(field.type_tag, value) {
                        return Err(SchemaViolation::TypeMismatch {
                            field: field.name.clone(),
                            expected: field.type_tag,
                            actual: value_kind(value).to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Whether a JSON value conforms to a declared type tag.
fn type_matches(tag: ParamType, value: &Value) -> bool {
    match tag {
        ParamType::Any => true,
        ParamType::String => value.is_string(),
        ParamType::Integer => value.is_i64() || value.is_u64(),
        ParamType::Number => value.is_number(),
        ParamType::Boolean => value.is_boolean(),
        ParamType::Object => value.is_object(),
        ParamType::Array => value.is_array(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
