//! Shared types used across the toolbridge helpers.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Conventional name of the implicit receiver parameter. Parameter specs
/// carrying this name are skipped during adaptation.
pub const RECEIVER_PARAM: &str = "self";

/// Name given to a foreign tool that carries none.
pub const UNNAMED_TOOL: &str = "Unnamed Tool";

/// A tool's callable entry point. Takes the argument object the tool was
/// invoked with and returns its textual output.
pub type ToolFn = Arc<dyn Fn(serde_json::Value) -> Result<String> + Send + Sync>;

// ---------------------------------------------------------------------------
// Parameter types
// ---------------------------------------------------------------------------

/// Declared type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    /// Accepts any value; used when a parameter carries no annotation.
    Any,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// One formal parameter of a foreign tool's callable, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    /// Declared type annotation, if any.
    pub type_tag: Option<ParamType>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, type_tag: Option<ParamType>) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }
}

/// Per-argument metadata a foreign tool publishes alongside its callable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgMetadata {
    pub description: String,
}

impl ArgMetadata {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tool representations
// ---------------------------------------------------------------------------

/// A tool as published by the source framework: a callable entry point plus
/// its parameter list and per-argument metadata, all exposed as data.
#[derive(Clone)]
pub struct ForeignTool {
    pub name: Option<String>,
    pub description: String,
    /// The callable entry point. Absence is a precondition violation
    /// surfaced by the adapter.
    pub forward: Option<ToolFn>,
    /// Formal parameters of `forward`, in declaration order.
    pub params: Vec<ParamSpec>,
    /// Argument metadata keyed by parameter name. Every non-receiver entry
    /// in `params` must have a matching key here.
    pub inputs: HashMap<String, ArgMetadata>,
}

impl fmt::Debug for ForeignTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("forward", &self.forward.as_ref().map(|_| "<fn>"))
            .field("params", &self.params)
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// A tool in the target framework's shape: name, description, callable and a
/// structural validation schema for its arguments.
#[derive(Clone)]
pub struct TargetTool {
    pub name: String,
    pub description: String,
    /// Same allocation as the foreign tool's `forward`; the adapter never
    /// wraps or renames the callable.
    pub func: ToolFn,
    pub args_schema: crate::schema::ArgsSchema,
}

impl fmt::Debug for TargetTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("func", &"<fn>")
            .field("args_schema", &self.args_schema)
            .finish()
    }
}
