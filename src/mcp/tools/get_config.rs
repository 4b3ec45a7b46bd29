//! `getConfig` tool.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::types::FunctionSettings;
use super::{parse_arguments, to_json};
use crate::error::ToolError;
use crate::lambda::{GetFunctionConfigurationRequest, LambdaApi};
use crate::mcp::protocol::ToolDefinition;
use crate::mcp::registry::ToolHandler;

/// Arguments for the getConfig tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigArgs {
    pub function_name: String,
}

/// Describes a function's settings (GetFunctionConfiguration).
pub struct GetConfigTool;

#[async_trait]
impl ToolHandler for GetConfigTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "getConfig".to_string(),
            description: "Get the runtime, handler, memory, timeout, environment and role \
                          of a Lambda function."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "functionName": {
                        "type": "string",
                        "description": "Name or ARN of the function"
                    }
                },
                "required": ["functionName"]
            }),
        }
    }

    fn failure_prefix(&self) -> &'static str {
        "Error getting configuration"
    }

    async fn execute(&self, arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError> {
        let GetConfigArgs { function_name } = parse_arguments(arguments)?;
        let config = lambda
            .get_function_configuration(GetFunctionConfigurationRequest { function_name })
            .await?;
        to_json(&FunctionSettings::from(config))
    }
}
