//! `deploy` tool: creates a new function from a zip archive.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::types::{deployment_config_schema, DeploymentConfig, DeploymentResult};
use super::{decode_archive, parse_arguments, to_json};
use crate::error::ToolError;
use crate::lambda::{CreateFunctionRequest, LambdaApi};
use crate::mcp::protocol::ToolDefinition;
use crate::mcp::registry::ToolHandler;

/// Arguments for the deploy tool.
#[derive(Debug, Deserialize)]
pub struct DeployArgs {
    pub config: DeploymentConfig,
    /// Base64-encoded zip archive.
    pub code: String,
}

/// Maps deploy arguments to a CreateFunction request.
///
/// # Errors
///
/// Returns [`ToolError::InvalidArchive`] if `code` is not valid base64.
pub fn build_request(args: DeployArgs) -> Result<CreateFunctionRequest, ToolError> {
    let zip_file = decode_archive(&args.code)?;
    let config = args.config;
    Ok(CreateFunctionRequest {
        function_name: config.function_name,
        runtime: config.runtime,
        handler: config.handler,
        role: config.role_arn,
        zip_file,
        memory_size: config.memory_size,
        timeout: config.timeout,
        environment: config.environment,
        architecture: config.architecture,
        vpc_config: config.vpc_config,
        tags: config.tags,
    })
}

/// Creates a function (CreateFunction).
pub struct DeployTool;

#[async_trait]
impl ToolHandler for DeployTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "deploy".to_string(),
            description: "Create a new Lambda function from a base64-encoded zip archive. \
                          Returns the function ARN, state and version."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "config": deployment_config_schema(),
                    "code": {
                        "type": "string",
                        "description": "Base64-encoded zip file containing the function code"
                    }
                },
                "required": ["config", "code"]
            }),
        }
    }

    fn failure_prefix(&self) -> &'static str {
        "Error deploying function"
    }

    async fn execute(&self, arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError> {
        let request = build_request(parse_arguments(arguments)?)?;
        let created = lambda.create_function(request).await?;
        to_json(&DeploymentResult::from(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::lambda::{Architecture, Runtime};

    fn args(config: Value) -> DeployArgs {
        serde_json::from_value(json!({ "config": config, "code": "UEsDBA==" })).unwrap()
    }

    #[test]
    fn maps_required_fields() {
        let request = build_request(args(json!({
            "functionName": "orders",
            "runtime": "nodejs18.x",
            "handler": "index.handler",
            "roleArn": "arn:aws:iam::123456789012:role/lambda"
        })))
        .unwrap();

        assert_eq!(request.function_name, "orders");
        assert_eq!(request.runtime, Runtime::Nodejs18);
        assert_eq!(request.handler, "index.handler");
        assert_eq!(request.role, "arn:aws:iam::123456789012:role/lambda");
        assert_eq!(request.zip_file, b"PK\x03\x04");
        assert!(request.memory_size.is_none());
        assert!(request.timeout.is_none());
        assert!(request.environment.is_none());
        assert!(request.architecture.is_none());
        assert!(request.vpc_config.is_none());
        assert!(request.tags.is_none());
    }

    #[test]
    fn maps_optional_fields() {
        let request = build_request(args(json!({
            "functionName": "orders",
            "runtime": "python3.9",
            "handler": "app.handler",
            "roleArn": "arn:aws:iam::123456789012:role/lambda",
            "memorySize": 256,
            "timeout": 30,
            "environment": { "STAGE": "prod" },
            "architecture": "arm64",
            "vpcConfig": { "subnetIds": ["subnet-1"], "securityGroupIds": ["sg-1"] },
            "tags": { "team": "payments" }
        })))
        .unwrap();

        assert_eq!(request.memory_size, Some(256));
        assert_eq!(request.timeout, Some(30));
        assert_eq!(
            request.environment,
            Some(BTreeMap::from([("STAGE".to_string(), "prod".to_string())]))
        );
        assert_eq!(request.architecture, Some(Architecture::Arm64));
        assert_eq!(request.vpc_config.unwrap().subnet_ids, ["subnet-1"]);
        assert_eq!(request.tags.unwrap()["team"], "payments");
    }

    #[test]
    fn rejects_unknown_runtime() {
        let result = parse_arguments::<DeployArgs>(json!({
            "config": {
                "functionName": "f",
                "runtime": "nodejs4.3",
                "handler": "h",
                "roleArn": "r"
            },
            "code": ""
        }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
