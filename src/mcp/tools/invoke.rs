//! `invoke` tool: synchronous invocation with a JSON payload.
//!
//! The function's response bytes are returned as text without re-parsing, so
//! callers see exactly what the function produced.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::parse_arguments;
use crate::error::ToolError;
use crate::lambda::{InvokeRequest, InvokeResponse, LambdaApi};
use crate::mcp::protocol::ToolDefinition;
use crate::mcp::registry::ToolHandler;

/// Arguments for the invoke tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeArgs {
    pub function_name: String,
    /// Event passed to the function. A missing payload is not an error: the
    /// function receives `null`.
    #[serde(default)]
    pub payload: Value,
}

/// Maps invoke arguments to an Invoke request.
///
/// # Errors
///
/// Returns [`ToolError::Payload`] if the payload cannot be serialised.
pub fn build_request(args: InvokeArgs) -> Result<InvokeRequest, ToolError> {
    Ok(InvokeRequest {
        payload: serde_json::to_vec(&args.payload).map_err(ToolError::Payload)?,
        function_name: args.function_name,
    })
}

/// Decodes the function's response bytes as UTF-8 text.
///
/// A response without a payload yields empty text rather than an error.
#[must_use]
pub fn response_text(response: &InvokeResponse) -> String {
    response
        .payload
        .as_deref()
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

/// Invokes a function and returns its raw response (Invoke).
pub struct InvokeTool;

#[async_trait]
impl ToolHandler for InvokeTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "invoke".to_string(),
            description: "Invoke a Lambda function synchronously with a JSON payload and \
                          return the raw response."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "functionName": {
                        "type": "string",
                        "description": "Name or ARN of the function to invoke"
                    },
                    "payload": {
                        "description": "Any JSON value, passed to the function as its event"
                    }
                },
                "required": ["functionName"]
            }),
        }
    }

    fn failure_prefix(&self) -> &'static str {
        "Error invoking function"
    }

    async fn execute(&self, arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError> {
        let request = build_request(parse_arguments(arguments)?)?;
        let response = lambda.invoke(request).await?;
        if let Some(function_error) = &response.function_error {
            debug!(
                status = response.status_code,
                function_error = %function_error,
                "Function returned an error payload"
            );
        }
        Ok(response_text(&response))
    }
}
