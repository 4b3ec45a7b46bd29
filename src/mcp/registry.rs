//! Tool registry.
//!
//! Built once at startup and never mutated afterwards; the server only reads
//! from it.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ToolError;
use crate::lambda::LambdaApi;
use crate::mcp::protocol::ToolDefinition;

/// One MCP tool: its advertised definition and the translation it performs.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name, description and input schema.
    fn definition(&self) -> ToolDefinition;

    /// Prefix of the message reported when the call fails,
    /// e.g. `Error deploying function`.
    fn failure_prefix(&self) -> &'static str;

    /// Validates `arguments`, performs the remote call and renders the result.
    ///
    /// Argument validation must happen before any call on `lambda`.
    async fn execute(&self, arguments: Value, lambda: &dyn LambdaApi) -> Result<String, ToolError>;
}

/// Name-indexed table of tool handlers, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    handlers: Vec<(String, Box<dyn ToolHandler>)>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under its definition's name.
    ///
    /// Registering a name twice replaces the earlier handler in place.
    pub fn register(&mut self, handler: Box<dyn ToolHandler>) {
        let name = handler.definition().name;
        if let Some(slot) = self.handlers.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = handler;
        } else {
            self.handlers.push((name, handler));
        }
    }

    /// Looks up a handler by tool name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ToolHandler> {
        self.handlers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, handler)| handler.as_ref())
    }

    /// Definitions of every registered tool.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.handlers.iter().map(|(_, h)| h.definition()).collect()
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Named(&'static str, &'static str);

    #[async_trait]
    impl ToolHandler for Named {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: self.0.to_string(),
                description: String::new(),
                input_schema: json!({ "type": "object" }),
            }
        }

        fn failure_prefix(&self) -> &'static str {
            self.1
        }

        async fn execute(&self, _: Value, _: &dyn LambdaApi) -> Result<String, ToolError> {
            Ok(String::new())
        }
    }

    #[test]
    fn lookup_by_name() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(Named("a", "first")));
        registry.register(Box::new(Named("b", "second")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("b").unwrap().failure_prefix(), "second");
        assert!(registry.get("c").is_none());
    }

    #[test]
    fn duplicate_name_last_wins_keeps_order() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(Named("a", "old")));
        registry.register(Box::new(Named("b", "other")));
        registry.register(Box::new(Named("a", "new")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").unwrap().failure_prefix(), "new");
        let names: Vec<_> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
