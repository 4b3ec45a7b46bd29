//! [`LambdaApi`] implementation backed by the AWS SDK for Rust.
//!
//! Credential resolution, request signing and retries all happen inside the
//! SDK; this module only converts between the SDK's builders and the plain
//! structures in [`super::model`].

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types;
use tracing::debug;

use super::error::{LambdaError, LambdaResult};
use super::model::{
    CreateFunctionRequest, DeleteFunctionRequest, EnvironmentResponse, FunctionConfiguration,
    GetFunctionConfigurationRequest, InvokeRequest, InvokeResponse, ListFunctionsPage,
    UpdateFunctionCodeRequest, UpdateFunctionConfigurationRequest,
};
use super::LambdaApi;

/// Where and as whom the SDK client talks to Lambda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// AWS region, e.g. `us-east-1`.
    pub region: String,
    /// Named profile from the shared config files.
    pub profile: Option<String>,
    /// Endpoint override (LocalStack and similar).
    pub endpoint_url: Option<String>,
}

/// Lambda backend using a shared `aws_sdk_lambda::Client`.
#[derive(Debug, Clone)]
pub struct SdkLambdaClient {
    client: aws_sdk_lambda::Client,
}

impl SdkLambdaClient {
    /// Wraps an already configured SDK client.
    #[must_use]
    pub const fn new(client: aws_sdk_lambda::Client) -> Self {
        Self { client }
    }

    /// Loads the SDK configuration (default credential chain) and builds a client.
    pub async fn from_settings(settings: &ClientSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()));
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        debug!(region = %settings.region, "Lambda client configured");
        Self::new(aws_sdk_lambda::Client::new(&sdk_config))
    }
}

/// Copies the fields shared by every FunctionConfiguration-shaped SDK output.
macro_rules! function_configuration {
    ($output:expr) => {{
        let output = $output;
        FunctionConfiguration {
            function_name: output.function_name().map(str::to_owned),
            function_arn: output.function_arn().map(str::to_owned),
            runtime: output.runtime().map(|r| r.as_str().to_owned()),
            role: output.role().map(str::to_owned),
            handler: output.handler().map(str::to_owned),
            description: output.description().map(str::to_owned),
            timeout: output.timeout(),
            memory_size: output.memory_size(),
            last_modified: output.last_modified().map(str::to_owned),
            code_sha256: output.code_sha256().map(str::to_owned),
            version: output.version().map(str::to_owned),
            environment: output.environment().map(|env| EnvironmentResponse {
                variables: env
                    .variables()
                    .map(|vars| vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            }),
            state: output.state().map(|s| s.as_str().to_owned()),
            state_reason: output.state_reason().map(str::to_owned),
            last_update_status: output.last_update_status().map(|s| s.as_str().to_owned()),
            package_type: output.package_type().map(|p| p.as_str().to_owned()),
            architectures: output
                .architectures()
                .iter()
                .map(|a| a.as_str().to_owned())
                .collect(),
        }
    }};
}

fn environment(variables: Option<BTreeMap<String, String>>) -> Option<types::Environment> {
    variables.map(|vars| {
        types::Environment::builder()
            .set_variables(Some(vars.into_iter().collect::<HashMap<_, _>>()))
            .build()
    })
}

#[async_trait]
impl LambdaApi for SdkLambdaClient {
    async fn create_function(
        &self,
        request: CreateFunctionRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        let code = types::FunctionCode::builder()
            .zip_file(Blob::new(request.zip_file))
            .build();
        let vpc_config = request.vpc_config.map(|vpc| {
            types::VpcConfig::builder()
                .set_subnet_ids(Some(vpc.subnet_ids))
                .set_security_group_ids(Some(vpc.security_group_ids))
                .build()
        });

        let output = self
            .client
            .create_function()
            .function_name(request.function_name)
            .runtime(types::Runtime::from(request.runtime.as_str()))
            .handler(request.handler)
            .role(request.role)
            .code(code)
            .set_memory_size(request.memory_size)
            .set_timeout(request.timeout)
            .set_environment(environment(request.environment))
            .set_architectures(
                request
                    .architecture
                    .map(|arch| vec![types::Architecture::from(arch.as_str())]),
            )
            .set_vpc_config(vpc_config)
            .set_tags(request.tags.map(|tags| tags.into_iter().collect()))
            .send()
            .await
            .map_err(LambdaError::from_sdk)?;

        Ok(function_configuration!(&output))
    }

    async fn update_function_configuration(
        &self,
        request: UpdateFunctionConfigurationRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        let output = self
            .client
            .update_function_configuration()
            .function_name(request.function_name)
            .set_runtime(
                request
                    .runtime
                    .map(|runtime| types::Runtime::from(runtime.as_str())),
            )
            .set_handler(request.handler)
            .set_memory_size(request.memory_size)
            .set_timeout(request.timeout)
            .set_environment(environment(request.environment))
            .send()
            .await
            .map_err(LambdaError::from_sdk)?;

        Ok(function_configuration!(&output))
    }

    async fn update_function_code(
        &self,
        request: UpdateFunctionCodeRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        let output = self
            .client
            .update_function_code()
            .function_name(request.function_name)
            .zip_file(Blob::new(request.zip_file))
            .send()
            .await
            .map_err(LambdaError::from_sdk)?;

        Ok(function_configuration!(&output))
    }

    async fn delete_function(&self, request: DeleteFunctionRequest) -> LambdaResult<()> {
        self.client
            .delete_function()
            .function_name(request.function_name)
            .send()
            .await
            .map_err(LambdaError::from_sdk)?;
        Ok(())
    }

    async fn get_function_configuration(
        &self,
        request: GetFunctionConfigurationRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        let output = self
            .client
            .get_function_configuration()
            .function_name(request.function_name)
            .send()
            .await
            .map_err(LambdaError::from_sdk)?;

        Ok(function_configuration!(&output))
    }

    async fn list_functions(&self) -> LambdaResult<ListFunctionsPage> {
        let output = self
            .client
            .list_functions()
            .send()
            .await
            .map_err(LambdaError::from_sdk)?;

        Ok(ListFunctionsPage {
            functions: output
                .functions()
                .iter()
                .map(|function| function_configuration!(function))
                .collect(),
            next_marker: output.next_marker().map(str::to_owned),
        })
    }

    async fn invoke(&self, request: InvokeRequest) -> LambdaResult<InvokeResponse> {
        let output = self
            .client
            .invoke()
            .function_name(request.function_name)
            .payload(Blob::new(request.payload))
            .send()
            .await
            .map_err(LambdaError::from_sdk)?;

        Ok(InvokeResponse {
            status_code: output.status_code(),
            function_error: output.function_error().map(str::to_owned),
            payload: output.payload().map(|blob| blob.as_ref().to_vec()),
        })
    }
}
