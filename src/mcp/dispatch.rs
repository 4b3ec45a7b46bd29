//! Tool call dispatch: lookup, validation, execution, result envelope.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::lambda::LambdaApi;
use crate::mcp::protocol::{ToolCallResult, ToolDefinition};
use crate::mcp::registry::ToolRegistry;
use crate::mcp::tools;

/// Routes `tools/call` requests to registered handlers.
///
/// Holds no mutable state, so any number of calls may run concurrently
/// against the same dispatcher.
pub struct Dispatcher {
    registry: ToolRegistry,
    lambda: Arc<dyn LambdaApi>,
}

impl Dispatcher {
    /// Creates a dispatcher over an explicit registry.
    #[must_use]
    pub fn new(registry: ToolRegistry, lambda: Arc<dyn LambdaApi>) -> Self {
        Self { registry, lambda }
    }

    /// Creates a dispatcher with all Lambda tools registered.
    #[must_use]
    pub fn with_lambda_tools(lambda: Arc<dyn LambdaApi>) -> Self {
        Self::new(tools::registry(), lambda)
    }

    /// Definitions for `tools/list`.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Executes one tool call.
    ///
    /// Never fails: unknown tools, invalid arguments and remote errors all
    /// come back as results with `is_error` set.
    pub async fn call(&self, name: &str, arguments: Value) -> ToolCallResult {
        let Some(handler) = self.registry.get(name) else {
            warn!(tool = name, "Unknown tool");
            return ToolCallResult::error(format!("Unknown tool: {name}"));
        };

        debug!(tool = name, "Tool call");

        match handler.execute(arguments, self.lambda.as_ref()).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) if e.is_validation() => {
                debug!(tool = name, error = %e, "Rejected tool arguments");
                ToolCallResult::error(format!("Invalid arguments for {name}: {e}"))
            }
            Err(e) => {
                warn!(tool = name, error = %e, "Tool call failed");
                ToolCallResult::error(format!("{}: {e}", handler.failure_prefix()))
            }
        }
    }
}
