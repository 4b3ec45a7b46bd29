//! lambda-deployer-mcp: MCP server for AWS Lambda function management
//!
//! Exposes seven Lambda operations as MCP tools over stdio:
//!
//! | Tool | Lambda API |
//! |------|------------|
//! | `deploy` | CreateFunction |
//! | `updateConfig` | UpdateFunctionConfiguration |
//! | `updateCode` | UpdateFunctionCode |
//! | `deleteFunction` | DeleteFunction |
//! | `getConfig` | GetFunctionConfiguration |
//! | `listFunctions` | ListFunctions |
//! | `invoke` | Invoke |
//!
//! Every tool call issues exactly one API request. Authentication, signing
//! and retries are left to the AWS SDK.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading and validation
//! - [`error`]: Error types
//! - [`lambda`]: Lambda backend trait and SDK implementation
//! - [`mcp`]: MCP protocol, dispatcher and tools

pub mod config;
pub mod error;
pub mod lambda;
pub mod mcp;
