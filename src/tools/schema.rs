// ABOUTME: JSON schema types describing tool inputs for agent function calling
// ABOUTME: ToolSchema pairs a tool name and description with its JsonSchema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tool schema as advertised to the agent layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// What the tool does
    pub description: String,
    /// Argument schema
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type, always `object` for tool arguments
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Argument properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required argument names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl JsonSchema {
    /// Object schema from `(name, type, description)` triples
    #[must_use]
    pub fn object(properties: &[(&str, &str, &str)], required: &[&str]) -> Self {
        let properties = properties
            .iter()
            .map(|&(name, property_type, description)| {
                (
                    name.to_owned(),
                    PropertySchema {
                        property_type: property_type.to_owned(),
                        description: Some(description.to_owned()),
                    },
                )
            })
            .collect();
        Self {
            schema_type: "object".to_owned(),
            properties: Some(properties),
            required: Some(required.iter().map(|&name| name.to_owned()).collect()),
        }
    }
}

/// JSON Schema property definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type (`number`, `integer`, `string`)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable description, including accepted values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
