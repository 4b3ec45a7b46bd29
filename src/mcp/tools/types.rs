//! Argument and result shapes shared by several tools.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::lambda::{Architecture, FunctionConfiguration, Runtime, VpcConfig};

/// Full function definition accepted by `deploy`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    pub function_name: String,
    pub runtime: Runtime,
    pub handler: String,
    #[serde(default)]
    pub memory_size: Option<i32>,
    #[serde(default)]
    pub timeout: Option<i32>,
    #[serde(default)]
    pub environment: Option<BTreeMap<String, String>>,
    pub role_arn: String,
    #[serde(default)]
    pub architecture: Option<Architecture>,
    #[serde(default)]
    pub vpc_config: Option<VpcConfig>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
}

/// Subset of [`DeploymentConfig`] accepted by `updateConfig`; every field optional.
///
/// `functionName` is accepted for symmetry with `deploy` but the top-level
/// `functionName` argument selects the function.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDeploymentConfig {
    #[serde(default)]
    pub function_name: Option<String>,
    #[serde(default)]
    pub runtime: Option<Runtime>,
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub memory_size: Option<i32>,
    #[serde(default)]
    pub timeout: Option<i32>,
    #[serde(default)]
    pub environment: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub role_arn: Option<String>,
}

/// Result of `deploy`, `updateConfig` and `updateCode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    /// Active, Pending, Inactive or Failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl From<FunctionConfiguration> for DeploymentResult {
    fn from(config: FunctionConfiguration) -> Self {
        Self {
            function_arn: config.function_arn,
            function_name: config.function_name,
            runtime: config.runtime,
            handler: config.handler,
            state: config.state,
            last_modified: config.last_modified,
            version: config.version,
        }
    }
}

/// Result of `getConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

impl From<FunctionConfiguration> for FunctionSettings {
    fn from(config: FunctionConfiguration) -> Self {
        Self {
            environment: config.environment.and_then(|env| env.variables),
            function_name: config.function_name,
            runtime: config.runtime,
            handler: config.handler,
            memory_size: config.memory_size,
            timeout: config.timeout,
            role_arn: config.role,
        }
    }
}

fn runtime_schema() -> Value {
    let names: Vec<_> = Runtime::ALL.iter().map(|r| r.as_str()).collect();
    json!({
        "type": "string",
        "enum": names,
        "description": "Lambda runtime identifier"
    })
}

fn string_map_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "additionalProperties": { "type": "string" },
        "description": description
    })
}

/// JSON Schema for [`DeploymentConfig`].
pub fn deployment_config_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "functionName": { "type": "string", "description": "Name of the function" },
            "runtime": runtime_schema(),
            "handler": { "type": "string", "description": "Entry point, e.g. 'index.handler'" },
            "memorySize": { "type": "integer", "description": "Memory in MB" },
            "timeout": { "type": "integer", "description": "Timeout in seconds" },
            "environment": string_map_schema("Environment variables"),
            "roleArn": { "type": "string", "description": "ARN of the execution role" },
            "architecture": {
                "type": "string",
                "enum": [Architecture::X86_64.as_str(), Architecture::Arm64.as_str()],
                "description": "Instruction set architecture (default: x86_64)"
            },
            "vpcConfig": {
                "type": "object",
                "properties": {
                    "subnetIds": { "type": "array", "items": { "type": "string" } },
                    "securityGroupIds": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["subnetIds", "securityGroupIds"]
            },
            "tags": string_map_schema("Tags applied to the function")
        },
        "required": ["functionName", "runtime", "handler", "roleArn"]
    })
}

/// JSON Schema for [`PartialDeploymentConfig`].
pub fn partial_deployment_config_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "functionName": { "type": "string" },
            "runtime": runtime_schema(),
            "handler": { "type": "string", "description": "Entry point, e.g. 'index.handler'" },
            "memorySize": { "type": "integer", "description": "Memory in MB" },
            "timeout": { "type": "integer", "description": "Timeout in seconds" },
            "environment": string_map_schema("Environment variables (replaces the existing set)"),
            "roleArn": { "type": "string", "description": "Accepted but ignored; the role is fixed at deploy time" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lambda::EnvironmentResponse;

    #[test]
    fn deployment_config_requires_role() {
        let value = json!({
            "functionName": "f",
            "runtime": "python3.9",
            "handler": "app.handler"
        });
        let err = serde_json::from_value::<DeploymentConfig>(value).unwrap_err();
        assert!(err.to_string().contains("roleArn"));
    }

    #[test]
    fn partial_config_accepts_empty_object() {
        let config: PartialDeploymentConfig = serde_json::from_value(json!({})).unwrap();
        assert!(config.runtime.is_none());
        assert!(config.environment.is_none());
    }

    #[test]
    fn deployment_result_omits_missing_fields() {
        let result = DeploymentResult::from(FunctionConfiguration {
            function_name: Some("f".to_string()),
            state: Some("Pending".to_string()),
            ..FunctionConfiguration::default()
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, json!({ "functionName": "f", "state": "Pending" }));
    }

    #[test]
    fn settings_flatten_environment() {
        let settings = FunctionSettings::from(FunctionConfiguration {
            role: Some("arn:aws:iam::1:role/r".to_string()),
            environment: Some(EnvironmentResponse {
                variables: Some(BTreeMap::from([("A".to_string(), "1".to_string())])),
            }),
            ..FunctionConfiguration::default()
        });
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["environment"]["A"], "1");
        assert_eq!(json["roleArn"], "arn:aws:iam::1:role/r");
    }

    #[test]
    fn schema_lists_every_runtime() {
        let schema = deployment_config_schema();
        let runtimes = schema["properties"]["runtime"]["enum"].as_array().unwrap();
        assert_eq!(runtimes.len(), Runtime::ALL.len());
        assert!(runtimes.contains(&json!("nodejs18.x")));
    }
}
