//! `listFunctions` tool.
//!
//! Returns the first page of ListFunctions as-is. Functions beyond that page
//! are not fetched.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::to_json;
use crate::error::ToolError;
use crate::lambda::LambdaApi;
use crate::mcp::protocol::ToolDefinition;
use crate::mcp::registry::ToolHandler;

/// Lists functions in the region (ListFunctions).
pub struct ListFunctionsTool;

#[async_trait]
impl ToolHandler for ListFunctionsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "listFunctions".to_string(),
            description: "List Lambda functions in the configured region \
                          (first page of results only)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    fn failure_prefix(&self) -> &'static str {
        "Error listing functions"
    }

    async fn execute(&self, _arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError> {
        let page = lambda.list_functions().await?;
        if let Some(marker) = &page.next_marker {
            debug!(
                returned = page.functions.len(),
                marker = %marker,
                "More functions available; only the first page is returned"
            );
        }
        to_json(&page.functions)
    }
}
