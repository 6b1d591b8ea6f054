//! Tool adapter: converts a foreign framework's tool into the target
//! framework's shape.
//!
//! The adapter reads the foreign tool's declared parameter list, cross-checks
//! it against the tool's per-argument metadata, and assembles a named
//! argument schema. It never wraps the callable and never mutates its input;
//! each call is an independent, synchronous transformation.

use crate::schema::{ArgsSchema, SchemaField};
use crate::types::{ForeignTool, ParamType, TargetTool, RECEIVER_PARAM, UNNAMED_TOOL};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Failure to adapt a foreign tool. Always surfaced to the caller as-is; the
/// adapter has no fallback path and never returns a partial tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdaptError {
    /// The foreign tool exposes no callable entry point.
    #[error("tool '{tool}' has no callable 'forward' entry point")]
    MissingCapability { tool: String },

    /// A declared parameter has no metadata entry, so no description can be
    /// attached to its schema field.
    #[error("parameter '{parameter}' has no entry in the tool's inputs metadata")]
    Schema { parameter: String },
}

/// Adapt a foreign tool into the target framework's tool shape.
///
/// The resulting schema is named `{tool name}Input` and holds one required
/// field per eligible (non-receiver) parameter, in declaration order.
/// Unannotated parameters get the any-type placeholder; parameter defaults
/// are never honoured. A tool with no eligible parameters yields an empty
/// but fully usable schema.
pub fn adapt(tool: &ForeignTool) -> Result<TargetTool, AdaptError> {
    let name = tool
        .name
        .clone()
        .unwrap_or_else(|| UNNAMED_TOOL.to_string());

    let forward = match &tool.forward {
        Some(f) => Arc::clone(f),
        None => {
            let err = AdaptError::MissingCapability { tool: name };
            error!("{err}");
            return Err(err);
        }
    };

    let mut fields = Vec::new();
    for param in &tool.params {
        if param.name == RECEIVER_PARAM {
            continue;
        }
        let meta = tool
            .inputs
            .get(&param.name)
            .ok_or_else(|| AdaptError::Schema {
                parameter: param.name.clone(),
            })?;
        fields.push(SchemaField {
            name: param.name.clone(),
            type_tag: param.type_tag.unwrap_or(ParamType::Any),
            required: true,
            description: meta.description.clone(),
        });
    }

    Ok(TargetTool {
        args_schema: ArgsSchema {
            name: format!("{name}Input"),
            fields,
        },
        description: tool.description.clone(),
        func: forward,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArgMetadata, ParamSpec, ToolFn};
    use serde_json::json;
    use std::collections::HashMap;

    fn noop_fn() -> ToolFn {
        Arc::new(|_args| Ok(String::new()))
    }

    fn search_tool() -> ForeignTool {
        ForeignTool {
            name: Some("search".into()),
            description: "Web search".into(),
            forward: Some(noop_fn()),
            params: vec![
                ParamSpec::new(RECEIVER_PARAM, None),
                ParamSpec::new("query", Some(ParamType::String)),
            ],
            inputs: HashMap::from([("query".into(), ArgMetadata::new("search text"))]),
        }
    }

    #[test]
    fn adapts_name_description_and_schema() {
        let tool = search_tool();
        let adapted = adapt(&tool).unwrap();

        assert_eq!(adapted.name, "search");
        assert_eq!(adapted.description, "Web search");
        assert_eq!(adapted.args_schema.name, "searchInput");
        assert_eq!(adapted.args_schema.len(), 1);

        let field = adapted.args_schema.field("query").unwrap();
        assert_eq!(field.type_tag, ParamType::String);
        assert!(field.required);
        assert_eq!(field.description, "search text");
    }

    #[test]
    fn callable_is_shared_not_wrapped() {
        let tool = search_tool();
        let adapted = adapt(&tool).unwrap();
        let forward = tool.forward.as_ref().unwrap();
        assert!(Arc::ptr_eq(&adapted.func, forward));
    }

    #[test]
    fn receiver_parameter_is_excluded() {
        let tool = search_tool();
        let adapted = adapt(&tool).unwrap();
        assert!(adapted.args_schema.field(RECEIVER_PARAM).is_none());
    }

    #[test]
    fn fields_follow_declaration_order_and_are_all_required() {
        let tool = ForeignTool {
            name: Some("fetch".into()),
            description: "Fetch a URL".into(),
            forward: Some(noop_fn()),
            params: vec![
                ParamSpec::new("url", Some(ParamType::String)),
                ParamSpec::new("timeout_ms", Some(ParamType::Integer)),
                ParamSpec::new("headers", Some(ParamType::Object)),
            ],
            inputs: HashMap::from([
                ("url".into(), ArgMetadata::new("target URL")),
                ("timeout_ms".into(), ArgMetadata::new("request timeout")),
                ("headers".into(), ArgMetadata::new("extra headers")),
            ]),
        };

        let adapted = adapt(&tool).unwrap();
        let names: Vec<&str> = adapted.args_schema.field_names().collect();
        assert_eq!(names, ["url", "timeout_ms", "headers"]);
        assert!(adapted.args_schema.fields.iter().all(|f| f.required));
    }

    #[test]
    fn unannotated_parameter_gets_any_placeholder() {
        let tool = ForeignTool {
            name: Some("echo".into()),
            description: "Echo".into(),
            forward: Some(noop_fn()),
            params: vec![ParamSpec::new("value", None)],
            inputs: HashMap::from([("value".into(), ArgMetadata::new("anything"))]),
        };
        let adapted = adapt(&tool).unwrap();
        assert_eq!(
            adapted.args_schema.field("value").unwrap().type_tag,
            ParamType::Any
        );
    }

    #[test]
    fn zero_parameter_tool_yields_empty_valid_schema() {
        let tool = ForeignTool {
            name: Some("ping".into()),
            description: "Liveness check".into(),
            forward: Some(noop_fn()),
            params: vec![ParamSpec::new(RECEIVER_PARAM, None)],
            inputs: HashMap::new(),
        };
        let adapted = adapt(&tool).unwrap();
        assert_eq!(adapted.args_schema.name, "pingInput");
        assert!(adapted.args_schema.is_empty());
        assert!(adapted.args_schema.validate(&json!({})).is_ok());
    }

    #[test]
    fn missing_name_falls_back_to_default() {
        let mut tool = search_tool();
        tool.name = None;
        let adapted = adapt(&tool).unwrap();
        assert_eq!(adapted.name, UNNAMED_TOOL);
        assert_eq!(adapted.args_schema.name, "Unnamed ToolInput");
    }

    #[test]
    fn missing_callable_fails_with_missing_capability() {
        let mut tool = search_tool();
        tool.forward = None;
        let err = adapt(&tool).unwrap_err();
        assert_eq!(
            err,
            AdaptError::MissingCapability {
                tool: "search".into()
            }
        );
    }

    #[test]
    fn missing_metadata_fails_naming_the_parameter() {
        let mut tool = search_tool();
        tool.inputs.clear();
        let err = adapt(&tool).unwrap_err();
        assert_eq!(
            err,
            AdaptError::Schema {
                parameter: "query".into()
            }
        );
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn adaptation_is_deterministic() {
        let tool = search_tool();
        let first = adapt(&tool).unwrap();
        let second = adapt(&tool).unwrap();
        assert_eq!(first.args_schema, second.args_schema);
        assert_eq!(first.name, second.name);
        assert_eq!(first.description, second.description);
    }

    #[test]
    fn input_tool_is_not_mutated() {
        let tool = search_tool();
        let params_before = tool.params.len();
        let inputs_before = tool.inputs.len();
        let _ = adapt(&tool).unwrap();
        assert_eq!(tool.params.len(), params_before);
        assert_eq!(tool.inputs.len(), inputs_before);
    }
}
