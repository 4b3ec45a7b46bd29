//! The Lambda management tools.
//!
//! Each tool validates its arguments, maps them to exactly one
//! [`LambdaApi`](crate::lambda::LambdaApi) request and renders the response
//! as text. The argument-to-request mapping is a plain function in every
//! module so it can be tested without a backend.

mod delete_function;
mod deploy;
mod get_config;
mod invoke;
mod list_functions;
mod types;
mod update_code;
mod update_config;

pub use delete_function::DeleteFunctionTool;
pub use deploy::DeployTool;
pub use get_config::GetConfigTool;
pub use invoke::InvokeTool;
pub use list_functions::ListFunctionsTool;
pub use types::{DeploymentConfig, DeploymentResult, FunctionSettings, PartialDeploymentConfig};
pub use update_code::UpdateCodeTool;
pub use update_config::UpdateConfigTool;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;
use crate::mcp::registry::ToolRegistry;

/// Standard alphabet, padding optional.
const ARCHIVE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Builds the registry holding every Lambda tool.
#[must_use]
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(DeployTool));
    registry.register(Box::new(UpdateConfigTool));
    registry.register(Box::new(UpdateCodeTool));
    registry.register(Box::new(DeleteFunctionTool));
    registry.register(Box::new(GetConfigTool));
    registry.register(Box::new(ListFunctionsTool));
    registry.register(Box::new(InvokeTool));
    registry
}

/// Deserialises tool arguments into their typed form.
pub(crate) fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(ToolError::InvalidArguments)
}

/// Decodes a base64 deployment archive. Embedded whitespace is ignored.
pub(crate) fn decode_archive(code: &str) -> Result<Vec<u8>, ToolError> {
    let compact: String = code.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(ARCHIVE_ENGINE.decode(compact)?)
}

/// Renders a tool result as compact JSON text.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string(value).map_err(ToolError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn registry_has_every_tool() {
        let names: Vec<_> = registry().definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            [
                "deploy",
                "updateConfig",
                "updateCode",
                "deleteFunction",
                "getConfig",
                "listFunctions",
                "invoke"
            ]
        );
    }

    #[test]
    fn definitions_have_object_schemas() {
        for tool in registry().definitions() {
            assert!(!tool.description.is_empty(), "{} has no description", tool.name);
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
        }
    }

    #[test]
    fn decode_archive_accepts_unpadded_and_wrapped_input() {
        let bytes = [0x50, 0x4b, 0x03, 0x04, 0xff];
        let encoded = STANDARD.encode(bytes);

        assert_eq!(decode_archive(&encoded).unwrap(), bytes);
        assert_eq!(decode_archive(encoded.trim_end_matches('=')).unwrap(), bytes);
        assert_eq!(
            decode_archive(&format!("{}\n{}", &encoded[..4], &encoded[4..])).unwrap(),
            bytes
        );
    }

    #[test]
    fn decode_archive_rejects_garbage() {
        let err = decode_archive("not*base64").unwrap_err();
        assert!(matches!(err, ToolError::InvalidArchive(_)));
        assert!(err.to_string().starts_with("invalid base64 archive"));
    }
}
