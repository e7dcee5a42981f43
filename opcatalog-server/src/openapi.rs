// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! OpenAPI document generation
//!
//! The document served at `/openapi.json` is derived from the same
//! [`Catalog`] the listing routes read, so routes and schema cannot drift.
//! Output is a pure function of the catalog and the service description.
//!
//! Besides the route descriptions, two places carry catalog contents:
//! - the `operation_id` path parameter enumerates every id;
//! - the `x-operation-catalog` extension maps each id to a JSON Schema of
//!   its parameters.

use opcatalog_core::{Catalog, OperationRecord, ParamKind, ServiceInfo};
use serde_json::{json, Map, Value};

pub const OPENAPI_VERSION: &str = "3.0.3";

/// Extension key holding per-operation parameter schemas
pub const OPERATION_CATALOG_KEY: &str = "x-operation-catalog";

/// Render the full OpenAPI document
pub fn generate(catalog: &Catalog, info: &ServiceInfo) -> Value {
    let categories = catalog.categories();
    let tags: Vec<Value> = categories
        .iter()
        .map(|(name, count)| {
            json!({
                "name": name,
                "description": format!("{} cataloged operation(s)", count)
            })
        })
        .collect();

    let operations: Map<String, Value> = catalog
        .list_all()
        .iter()
        .map(|op| (op.id.clone(), catalog_entry(op)))
        .collect();

    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": info.name,
            "description": info.description,
            "version": info.version,
            "x-technical-documentation": info.technical_documentation,
            "x-source-docs": info.source_docs
        },
        "tags": tags,
        "paths": paths(catalog),
        "components": {
            "schemas": {
                "Operation": operation_schema(),
                "Parameter": parameter_schema(),
                "CategoryCounts": category_counts_schema(),
                "CategoryDetail": category_detail_schema(),
                "Metadata": metadata_schema(),
                "NotFoundError": not_found_schema(),
                "BadRequestError": bad_request_schema(),
                "InternalError": internal_error_schema()
            }
        },
        OPERATION_CATALOG_KEY: operations
    })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": schema}}
    })
}

fn schema_ref(name: &str) -> Value {
    json!({"$ref": format!("#/components/schemas/{}", name)})
}

fn paths(catalog: &Catalog) -> Value {
    let internal = json_response("internal error", schema_ref("InternalError"));
    let bad_request = json_response("malformed query or path", schema_ref("BadRequestError"));

    let mut operation_id_schema = json!({"type": "string"});
    if !catalog.is_empty() {
        let ids: Vec<&str> = catalog.ids().collect();
        operation_id_schema["enum"] = json!(ids);
    }

    json!({
        "/metadata": {
            "get": {
                "operationId": "get_metadata",
                "summary": "Describe the service and its catalog",
                "responses": {
                    "200": json_response("service description", schema_ref("Metadata")),
                    "500": internal
                }
            }
        },
        "/operations": {
            "get": {
                "operationId": "list_operations",
                "summary": "List cataloged operations in catalog order",
                "parameters": [
                    {
                        "name": "category",
                        "in": "query",
                        "required": false,
                        "description": "only operations whose category matches exactly",
                        "schema": {"type": "string"}
                    }
                ],
                "responses": {
                    "200": json_response(
                        "operations",
                        json!({"type": "array", "items": schema_ref("Operation")})
                    ),
                    "400": bad_request,
                    "500": internal
                }
            }
        },
        "/operations/{operation_id}": {
            "get": {
                "operationId": "get_operation",
                "summary": "Fetch one operation by id",
                "parameters": [
                    {
                        "name": "operation_id",
                        "in": "path",
                        "required": true,
                        "schema": operation_id_schema
                    }
                ],
                "responses": {
                    "200": json_response("operation", schema_ref("Operation")),
                    "400": bad_request,
                    "404": json_response("no operation with this id", schema_ref("NotFoundError")),
                    "500": internal
                }
            }
        },
        "/categories": {
            "get": {
                "operationId": "list_categories",
                "summary": "Operation counts per category",
                "parameters": [
                    {
                        "name": "detailed",
                        "in": "query",
                        "required": false,
                        "description": "return member operation ids per category",
                        "schema": {"type": "boolean", "default": false}
                    }
                ],
                "responses": {
                    "200": json_response(
                        "category summary",
                        json!({
                            "oneOf": [
                                schema_ref("CategoryCounts"),
                                {"type": "array", "items": schema_ref("CategoryDetail")}
                            ]
                        })
                    ),
                    "400": bad_request,
                    "500": internal
                }
            }
        },
        "/openapi.json": {
            "get": {
                "operationId": "get_schema",
                "summary": "This document",
                "responses": {
                    "200": json_response("OpenAPI document", json!({"type": "object"})),
                    "500": internal
                }
            }
        }
    })
}

/// JSON Schema fragment for one parameter kind
pub fn param_kind_schema(kind: &ParamKind) -> Value {
    match kind {
        ParamKind::String => json!({"type": "string"}),
        ParamKind::Boolean => json!({"type": "boolean"}),
        ParamKind::Integer => json!({"type": "integer"}),
        ParamKind::Enum { values } => json!({"type": "string", "enum": values}),
        ParamKind::Object => json!({"type": "object"}),
        ParamKind::List { items } => json!({"type": "array", "items": param_kind_schema(items)}),
        // any JSON value
        ParamKind::Variant => json!({"x-kind": "variant"}),
    }
}

/// JSON Schema describing a valid input object for `operation`
pub fn parameters_schema(operation: &OperationRecord) -> Value {
    let mut properties = Map::new();
    for parameter in &operation.parameters {
        let mut schema = param_kind_schema(&parameter.kind);
        if let Value::Object(fields) = &mut schema {
            fields.insert(
                "description".to_string(),
                Value::String(parameter.description.clone()),
            );
        }
        properties.insert(parameter.name.clone(), schema);
    }

    let mut schema = json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
        "x-parameter-order": operation
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
    });

    let required: Vec<&str> = operation
        .required_parameters()
        .map(|p| p.name.as_str())
        .collect();
    if !required.is_empty() {
        schema["required"] = json!(required);
    }

    schema
}

fn catalog_entry(operation: &OperationRecord) -> Value {
    json!({
        "name": operation.name,
        "category": operation.category,
        "summary": operation.summary,
        "parameters": parameters_schema(operation)
    })
}

/// Schema of one entry of `Operation.parameters`
pub fn parameter_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "type", "optional", "description"],
        "properties": {
            "name": {"type": "string", "minLength": 1},
            "type": {"type": "string", "enum": ParamKind::NAMES},
            "optional": {"type": "boolean"},
            "description": {"type": "string"},
            "values": {"type": "array", "items": {"type": "string"}, "minItems": 1},
            "items": {
                "type": "object",
                "required": ["type"],
                "properties": {"type": {"type": "string", "enum": ParamKind::NAMES}}
            }
        }
    })
}

/// Schema of an operation object as served by `/operations`
///
/// Self-contained (parameters are inlined) so it can be used as a plain
/// JSON Schema as well as an OpenAPI component.
pub fn operation_schema() -> Value {
    json!({
        "type": "object",
        "required": ["id", "name", "category", "summary", "description", "parameters", "source_refs"],
        "additionalProperties": false,
        "properties": {
            "id": {"type": "string", "pattern": "^[a-z0-9_]+$"},
            "name": {"type": "string"},
            "category": {"type": "string"},
            "summary": {"type": "string"},
            "description": {"type": "string"},
            "parameters": {"type": "array", "items": parameter_schema()},
            "source_refs": {"type": "array", "items": {"type": "string"}, "uniqueItems": true}
        }
    })
}

fn category_counts_schema() -> Value {
    json!({
        "type": "object",
        "description": "category name to operation count, in first-occurrence order",
        "additionalProperties": {"type": "integer", "minimum": 1}
    })
}

fn category_detail_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "count", "operations"],
        "properties": {
            "name": {"type": "string"},
            "count": {"type": "integer", "minimum": 1},
            "operations": {"type": "array", "items": {"type": "string"}}
        }
    })
}

fn metadata_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "description", "version", "operation_count", "categories", "documentation"],
        "properties": {
            "name": {"type": "string"},
            "description": {"type": "string"},
            "version": {"type": "string"},
            "operation_count": {"type": "integer", "minimum": 0},
            "categories": category_counts_schema(),
            "documentation": {
                "type": "object",
                "required": ["technical", "source_docs"],
                "properties": {
                    "technical": {"type": "string"},
                    "source_docs": {"type": "array", "items": {"type": "string"}}
                }
            }
        }
    })
}

fn not_found_schema() -> Value {
    json!({
        "type": "object",
        "required": ["error", "id"],
        "additionalProperties": false,
        "properties": {
            "error": {"type": "string", "enum": ["not_found"]},
            "id": {"type": "string"}
        }
    })
}

fn bad_request_schema() -> Value {
    json!({
        "type": "object",
        "required": ["error", "message"],
        "additionalProperties": false,
        "properties": {
            "error": {"type": "string", "enum": ["bad_request"]},
            "message": {"type": "string"}
        }
    })
}

fn internal_error_schema() -> Value {
    json!({
        "type": "object",
        "required": ["error", "message"],
        "additionalProperties": false,
        "properties": {
            "error": {"type": "string", "enum": ["internal"]},
            "message": {"type": "string"}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonschema::JSONSchema;
    use opcatalog_core::{builtin_service_info, Parameter};
    use std::collections::BTreeSet;

    fn catalog_ids(doc: &Value) -> BTreeSet<String> {
        doc[OPERATION_CATALOG_KEY]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_generate_is_deterministic() {
        let catalog = Catalog::builtin().unwrap();
        let info = builtin_service_info();
        let first = serde_json::to_vec(&generate(&catalog, &info)).unwrap();
        let second = serde_json::to_vec(&generate(&catalog, &info)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_round_trip_through_schema() {
        let catalog = Catalog::builtin().unwrap();
        let doc = generate(&catalog, &builtin_service_info());

        let listed: BTreeSet<String> = catalog.ids().map(String::from).collect();
        assert_eq!(catalog_ids(&doc), listed);

        let path_enum: BTreeSet<String> = doc["paths"]["/operations/{operation_id}"]["get"]
            ["parameters"][0]["schema"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(path_enum, listed);
    }

    #[test]
    fn test_paths_mirror_routes() {
        let doc = generate(&Catalog::builtin().unwrap(), &builtin_service_info());
        let paths: BTreeSet<&str> = doc["paths"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            paths,
            BTreeSet::from([
                "/categories",
                "/metadata",
                "/openapi.json",
                "/operations",
                "/operations/{operation_id}",
            ])
        );
        assert_eq!(doc["openapi"], OPENAPI_VERSION);
    }

    #[test]
    fn test_input_routes_document_bad_request() {
        let doc = generate(&Catalog::builtin().unwrap(), &builtin_service_info());
        for path in ["/operations", "/operations/{operation_id}", "/categories"] {
            assert_eq!(
                doc["paths"][path]["get"]["responses"]["400"]["content"]["application/json"]
                    ["schema"]["$ref"],
                "#/components/schemas/BadRequestError",
                "{} lacks a 400 response",
                path
            );
        }
        assert!(doc["paths"]["/metadata"]["get"]["responses"]
            .get("400")
            .is_none());
    }

    #[test]
    fn test_tags_follow_category_order() {
        let catalog = Catalog::builtin().unwrap();
        let doc = generate(&catalog, &builtin_service_info());
        let tags: Vec<&str> = doc["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        let categories = catalog.categories();
        let expected: Vec<&str> = categories.iter().map(|(name, _)| name).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn test_empty_catalog_still_generates() {
        let doc = generate(&Catalog::empty(), &builtin_service_info());
        assert!(doc[OPERATION_CATALOG_KEY].as_object().unwrap().is_empty());
        assert!(doc["tags"].as_array().unwrap().is_empty());
        let id_schema = &doc["paths"]["/operations/{operation_id}"]["get"]["parameters"][0]["schema"];
        assert!(id_schema.get("enum").is_none());
    }

    #[test]
    fn test_every_kind_renders() {
        assert_eq!(param_kind_schema(&ParamKind::Integer), json!({"type": "integer"}));
        assert_eq!(
            param_kind_schema(&ParamKind::one_of(["grant", "revoke"])),
            json!({"type": "string", "enum": ["grant", "revoke"]})
        );
        assert_eq!(
            param_kind_schema(&ParamKind::list_of(ParamKind::Object)),
            json!({"type": "array", "items": {"type": "object"}})
        );
        assert_eq!(param_kind_schema(&ParamKind::Variant)["x-kind"], "variant");
    }

    #[test]
    fn test_parameters_schema_validates_inputs() {
        let catalog = Catalog::builtin().unwrap();
        let op = catalog.get("manage_relationships").unwrap();
        let schema = parameters_schema(op);
        assert_eq!(schema["required"], json!(["user_id", "action"]));
        assert_eq!(schema["x-parameter-order"], json!(["user_id", "action"]));

        let compiled = JSONSchema::compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!({"user_id": "42", "action": "block"})));
        assert!(!compiled.is_valid(&json!({"user_id": "42", "action": "befriend"})));
        assert!(!compiled.is_valid(&json!({"user_id": "42"})));
        assert!(!compiled.is_valid(&json!({"user_id": "42", "action": "add", "extra": 1})));
    }

    #[test]
    fn test_variant_accepts_any_value() {
        let op = OperationRecord::new("set", "Set", "settings", "Set a value.").with_parameter(
            Parameter::required("value", ParamKind::Variant, "Any value."),
        );
        let compiled = JSONSchema::compile(&parameters_schema(&op)).unwrap();
        for value in [json!("dark"), json!(3), json!(true), json!({"a": 1}), json!([1, 2])] {
            assert!(compiled.is_valid(&json!({ "value": value })));
        }
    }

    #[test]
    fn test_no_required_key_without_required_parameters() {
        let op = OperationRecord::new("noop", "Noop", "misc", "Nothing.")
            .with_parameter(Parameter::optional("flag", ParamKind::Boolean, ""));
        assert!(parameters_schema(&op).get("required").is_none());
    }
}
