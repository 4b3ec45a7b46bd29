//! `deleteFunction` tool.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_arguments;
use crate::error::ToolError;
use crate::lambda::{DeleteFunctionRequest, LambdaApi};
use crate::mcp::protocol::ToolDefinition;
use crate::mcp::registry::ToolHandler;

/// Arguments for the deleteFunction tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFunctionArgs {
    pub function_name: String,
}

/// Deletes a function (DeleteFunction).
pub struct DeleteFunctionTool;

#[async_trait]
impl ToolHandler for DeleteFunctionTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "deleteFunction".to_string(),
            description: "Delete a Lambda function and all of its versions.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "functionName": {
                        "type": "string",
                        "description": "Name or ARN of the function to delete"
                    }
                },
                "required": ["functionName"]
            }),
        }
    }

    fn failure_prefix(&self) -> &'static str {
        "Error deleting function"
    }

    async fn execute(&self, arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError> {
        let DeleteFunctionArgs { function_name } = parse_arguments(arguments)?;
        lambda
            .delete_function(DeleteFunctionRequest {
                function_name: function_name.clone(),
            })
            .await?;
        Ok(format!("Function {function_name} deleted successfully"))
    }
}
