//! `updateCode` tool.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::types::DeploymentResult;
use super::{decode_archive, parse_arguments, to_json};
use crate::error::ToolError;
use crate::lambda::{LambdaApi, UpdateFunctionCodeRequest};
use crate::mcp::protocol::ToolDefinition;
use crate::mcp::registry::ToolHandler;

/// Arguments for the updateCode tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCodeArgs {
    pub function_name: String,
    /// Base64-encoded zip archive.
    pub code: String,
}

/// Maps updateCode arguments to an UpdateFunctionCode request.
///
/// # Errors
///
/// Returns [`ToolError::InvalidArchive`] if `code` is not valid base64.
pub fn build_request(args: UpdateCodeArgs) -> Result<UpdateFunctionCodeRequest, ToolError> {
    Ok(UpdateFunctionCodeRequest {
        zip_file: decode_archive(&args.code)?,
        function_name: args.function_name,
    })
}

/// Replaces a function's code (UpdateFunctionCode).
pub struct UpdateCodeTool;

#[async_trait]
impl ToolHandler for UpdateCodeTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "updateCode".to_string(),
            description: "Replace the code of an existing Lambda function with a \
                          base64-encoded zip archive."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "functionName": {
                        "type": "string",
                        "description": "Name or ARN of the function to update"
                    },
                    "code": {
                        "type": "string",
                        "description": "Base64-encoded zip file containing the function code"
                    }
                },
                "required": ["functionName", "code"]
            }),
        }
    }

    fn failure_prefix(&self) -> &'static str {
        "Error updating code"
    }

    async fn execute(&self, arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError> {
        let request = build_request(parse_arguments(arguments)?)?;
        let updated = lambda.update_function_code(request).await?;
        to_json(&DeploymentResult::from(updated))
    }
}
