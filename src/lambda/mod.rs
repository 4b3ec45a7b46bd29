//! AWS Lambda backend.
//!
//! # Modules
//!
//! - [`model`]: Backend-neutral request/response structures
//! - [`client`]: [`LambdaApi`] implementation over `aws-sdk-lambda`
//! - [`error`]: [`LambdaError`]
//!
//! Each tool handler performs exactly one [`LambdaApi`] call. The trait is
//! object safe so the server can hold a single shared `Arc<dyn LambdaApi>`
//! for the lifetime of the process.

pub mod client;
pub mod error;
pub mod model;

pub use client::{ClientSettings, SdkLambdaClient};
pub use error::{LambdaError, LambdaResult};
pub use model::{
    Architecture, CreateFunctionRequest, DeleteFunctionRequest, EnvironmentResponse,
    FunctionConfiguration, GetFunctionConfigurationRequest, InvokeRequest, InvokeResponse,
    ListFunctionsPage, Runtime, UpdateFunctionCodeRequest, UpdateFunctionConfigurationRequest,
    VpcConfig,
};

use async_trait::async_trait;

/// The Lambda management operations exposed as tools.
///
/// Implementations must be safe to call concurrently from independent tool
/// invocations.
#[async_trait]
pub trait LambdaApi: Send + Sync {
    /// CreateFunction.
    async fn create_function(
        &self,
        request: CreateFunctionRequest,
    ) -> LambdaResult<FunctionConfiguration>;

    /// UpdateFunctionConfiguration.
    async fn update_function_configuration(
        &self,
        request: UpdateFunctionConfigurationRequest,
    ) -> LambdaResult<FunctionConfiguration>;

    /// UpdateFunctionCode.
    async fn update_function_code(
        &self,
        request: UpdateFunctionCodeRequest,
    ) -> LambdaResult<FunctionConfiguration>;

    /// DeleteFunction.
    async fn delete_function(&self, request: DeleteFunctionRequest) -> LambdaResult<()>;

    /// GetFunctionConfiguration.
    async fn get_function_configuration(
        &self,
        request: GetFunctionConfigurationRequest,
    ) -> LambdaResult<FunctionConfiguration>;

    /// ListFunctions, first page only.
    async fn list_functions(&self) -> LambdaResult<ListFunctionsPage>;

    /// Invoke with the `RequestResponse` invocation type.
    async fn invoke(&self, request: InvokeRequest) -> LambdaResult<InvokeResponse>;
}
