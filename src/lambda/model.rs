//! Request and response structures for the Lambda operations used by the tools.
//!
//! These are deliberately independent of the AWS SDK types so that the mapping
//! from tool arguments to remote requests is a plain function that tests can
//! inspect, and so a fake backend can stand in for the real client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Runtimes accepted by `deploy` and `updateConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Runtime {
    /// Node.js 18.
    #[serde(rename = "nodejs18.x")]
    Nodejs18,
    /// Node.js 16.
    #[serde(rename = "nodejs16.x")]
    Nodejs16,
    /// Python 3.9.
    #[serde(rename = "python3.9")]
    Python39,
    /// Python 3.8.
    #[serde(rename = "python3.8")]
    Python38,
    /// Java 11 (Corretto).
    #[serde(rename = "java11")]
    Java11,
    /// .NET 6.
    #[serde(rename = "dotnet6")]
    Dotnet6,
    /// Go 1.x.
    #[serde(rename = "go1.x")]
    Go1,
    /// Ruby 2.7.
    #[serde(rename = "ruby2.7")]
    Ruby27,
}

impl Runtime {
    /// Every supported runtime, in the order advertised by the input schemas.
    pub const ALL: [Self; 8] = [
        Self::Nodejs18,
        Self::Nodejs16,
        Self::Python39,
        Self::Python38,
        Self::Java11,
        Self::Dotnet6,
        Self::Go1,
        Self::Ruby27,
    ];

    /// Returns the Lambda runtime identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nodejs18 => "nodejs18.x",
            Self::Nodejs16 => "nodejs16.x",
            Self::Python39 => "python3.9",
            Self::Python38 => "python3.8",
            Self::Java11 => "java11",
            Self::Dotnet6 => "dotnet6",
            Self::Go1 => "go1.x",
            Self::Ruby27 => "ruby2.7",
        }
    }
}

/// Instruction set architecture of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    /// 64-bit x86.
    #[serde(rename = "x86_64")]
    X86_64,
    /// 64-bit ARM (Graviton).
    #[serde(rename = "arm64")]
    Arm64,
}

impl Architecture {
    /// Returns the Lambda architecture identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Arm64 => "arm64",
        }
    }
}

/// VPC attachment for a new function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcConfig {
    /// Subnets the function's network interfaces are placed in.
    pub subnet_ids: Vec<String>,
    /// Security groups attached to those interfaces.
    pub security_group_ids: Vec<String>,
}

/// CreateFunction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFunctionRequest {
    pub function_name: String,
    pub runtime: Runtime,
    pub handler: String,
    /// Execution role ARN.
    pub role: String,
    /// Raw bytes of the deployment zip.
    pub zip_file: Vec<u8>,
    pub memory_size: Option<i32>,
    pub timeout: Option<i32>,
    pub environment: Option<BTreeMap<String, String>>,
    pub architecture: Option<Architecture>,
    pub vpc_config: Option<VpcConfig>,
    pub tags: Option<BTreeMap<String, String>>,
}

/// UpdateFunctionConfiguration request. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFunctionConfigurationRequest {
    pub function_name: String,
    pub runtime: Option<Runtime>,
    pub handler: Option<String>,
    pub memory_size: Option<i32>,
    pub timeout: Option<i32>,
    pub environment: Option<BTreeMap<String, String>>,
}

/// UpdateFunctionCode request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFunctionCodeRequest {
    pub function_name: String,
    pub zip_file: Vec<u8>,
}

/// DeleteFunction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFunctionRequest {
    pub function_name: String,
}

/// GetFunctionConfiguration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFunctionConfigurationRequest {
    pub function_name: String,
}

/// Invoke request (synchronous, `RequestResponse` invocation type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeRequest {
    pub function_name: String,
    /// JSON document handed to the function.
    pub payload: Vec<u8>,
}

/// Invoke response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeResponse {
    pub status_code: i32,
    /// Set by the service when the function itself raised.
    pub function_error: Option<String>,
    /// Bytes returned by the function.
    pub payload: Option<Vec<u8>>,
}

/// One page of ListFunctions output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFunctionsPage {
    pub functions: Vec<FunctionConfiguration>,
    /// Continuation marker; `Some` when more functions exist.
    pub next_marker: Option<String>,
}

/// Environment variables as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<BTreeMap<String, String>>,
}

/// Function descriptor returned by every function-describing operation.
///
/// Serialises with the Lambda API's own field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub architectures: Vec<String>,
}

impl FunctionConfiguration {
    /// Returns the environment variables, if the function has any.
    #[must_use]
    pub fn variables(&self) -> Option<&BTreeMap<String, String>> {
        self.environment.as_ref()?.variables.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_identifiers_match_serde_names() {
        for runtime in Runtime::ALL {
            let json = serde_json::to_value(runtime).unwrap();
            assert_eq!(json, runtime.as_str());
        }
    }

    #[test]
    fn unknown_runtime_rejected() {
        let result: Result<Runtime, _> = serde_json::from_str("\"cobol85\"");
        assert!(result.is_err());
    }

    #[test]
    fn function_configuration_uses_api_field_names() {
        let config = FunctionConfiguration {
            function_name: Some("orders".to_string()),
            code_sha256: Some("abc=".to_string()),
            environment: Some(EnvironmentResponse {
                variables: Some(BTreeMap::from([("STAGE".to_string(), "prod".to_string())])),
            }),
            ..FunctionConfiguration::default()
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["FunctionName"], "orders");
        assert_eq!(json["CodeSha256"], "abc=");
        assert_eq!(json["Environment"]["Variables"]["STAGE"], "prod");
        assert!(json.get("Runtime").is_none());
        assert!(json.get("Architectures").is_none());
    }

    #[test]
    fn variables_accessor() {
        assert!(FunctionConfiguration::default().variables().is_none());

        let config = FunctionConfiguration {
            environment: Some(EnvironmentResponse::default()),
            ..FunctionConfiguration::default()
        };
        assert!(config.variables().is_none());
    }
}
