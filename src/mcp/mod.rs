//! Model Context Protocol (MCP) server.
//!
//! Exposes the Lambda management operations as MCP tools over the stdio
//! transport (newline-delimited JSON-RPC 2.0).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           MCP Server                           │
//! │                                                                │
//! │  ┌───────────┐   ┌───────────┐   ┌────────────┐   ┌─────────┐  │
//! │  │ Transport │──▶│  Server   │──▶│ Dispatcher │──▶│  Tools  │  │
//! │  │  (stdio)  │   │(lifecycle)│   │ (registry) │   │(handlers│  │
//! │  └───────────┘   └───────────┘   └────────────┘   └────┬────┘  │
//! │                                                        │       │
//! └────────────────────────────────────────────────────────┼───────┘
//!                                                          ▼
//!                                              Arc<dyn LambdaApi>
//! ```
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod dispatch;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod tools;
pub mod transport;

pub use dispatch::Dispatcher;
pub use protocol::{ToolCallResult, ToolDefinition, MCP_PROTOCOL_VERSION};
pub use registry::{ToolHandler, ToolRegistry};
pub use server::McpServer;
pub use transport::{Line, StdioTransport, Transport};
