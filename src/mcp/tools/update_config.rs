//! `updateConfig` tool.
//!
//! Only the fields present in the arguments are sent; the service decides
//! what happens to the rest. No read-modify-write merge is performed.
//! `functionName` and `roleArn` inside `config` are accepted but not sent; the
//! execution role is only set at deploy time.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::types::{partial_deployment_config_schema, DeploymentResult, PartialDeploymentConfig};
use super::{parse_arguments, to_json};
use crate::error::ToolError;
use crate::lambda::{LambdaApi, UpdateFunctionConfigurationRequest};
use crate::mcp::protocol::ToolDefinition;
use crate::mcp::registry::ToolHandler;

/// Arguments for the updateConfig tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigArgs {
    pub function_name: String,
    pub config: PartialDeploymentConfig,
}

/// Maps updateConfig arguments to an UpdateFunctionConfiguration request.
#[must_use]
pub fn build_request(args: UpdateConfigArgs) -> UpdateFunctionConfigurationRequest {
    let config = args.config;
    UpdateFunctionConfigurationRequest {
        function_name: args.function_name,
        runtime: config.runtime,
        handler: config.handler,
        memory_size: config.memory_size,
        timeout: config.timeout,
        environment: config.environment,
    }
}

/// Changes function settings (UpdateFunctionConfiguration).
pub struct UpdateConfigTool;

#[async_trait]
impl ToolHandler for UpdateConfigTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "updateConfig".to_string(),
            description: "Update the configuration of an existing Lambda function. \
                          Only the provided fields are sent."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "functionName": {
                        "type": "string",
                        "description": "Name or ARN of the function to update"
                    },
                    "config": partial_deployment_config_schema()
                },
                "required": ["functionName", "config"]
            }),
        }
    }

    fn failure_prefix(&self) -> &'static str {
        "Error updating configuration"
    }

    async fn execute(&self, arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError> {
        let request = build_request(parse_arguments(arguments)?);
        let updated = lambda.update_function_configuration(request).await?;
        to_json(&DeploymentResult::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lambda::Runtime;

    #[test]
    fn absent_fields_stay_absent() {
        let args: UpdateConfigArgs = serde_json::from_value(json!({
            "functionName": "orders",
            "config": { "timeout": 60 }
        }))
        .unwrap();

        assert_eq!(
            build_request(args),
            UpdateFunctionConfigurationRequest {
                function_name: "orders".to_string(),
                timeout: Some(60),
                ..UpdateFunctionConfigurationRequest::default()
            }
        );
    }

    #[test]
    fn config_name_and_role_are_not_forwarded() {
        let args: UpdateConfigArgs = serde_json::from_value(json!({
            "functionName": "orders",
            "config": {
                "functionName": "ignored",
                "runtime": "python3.8",
                "roleArn": "arn:aws:iam::1:role/new"
            }
        }))
        .unwrap();

        assert_eq!(
            build_request(args),
            UpdateFunctionConfigurationRequest {
                function_name: "orders".to_string(),
                runtime: Some(Runtime::Python38),
                ..UpdateFunctionConfigurationRequest::default()
            }
        );
    }
}
