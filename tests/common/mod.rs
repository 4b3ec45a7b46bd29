//! Recording fake of the Lambda backend shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use lambda_deployer_mcp::lambda::{
    CreateFunctionRequest, DeleteFunctionRequest, FunctionConfiguration,
    GetFunctionConfigurationRequest, InvokeRequest, InvokeResponse, LambdaApi, LambdaError,
    LambdaResult, ListFunctionsPage, UpdateFunctionCodeRequest,
    UpdateFunctionConfigurationRequest,
};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(CreateFunctionRequest),
    UpdateConfig(UpdateFunctionConfigurationRequest),
    UpdateCode(UpdateFunctionCodeRequest),
    Delete(DeleteFunctionRequest),
    Get(GetFunctionConfigurationRequest),
    List,
    Invoke(InvokeRequest),
}

/// Records every request and answers with canned data or a canned error.
#[derive(Default)]
pub struct FakeLambda {
    calls: Mutex<Vec<Call>>,
    failure: Option<LambdaError>,
    function: FunctionConfiguration,
    page: ListFunctionsPage,
    invoke_payload: Option<Vec<u8>>,
}

impl FakeLambda {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error`.
    pub fn failing(error: LambdaError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn with_function(mut self, function: FunctionConfiguration) -> Self {
        self.function = function;
        self
    }

    pub fn with_page(mut self, page: ListFunctionsPage) -> Self {
        self.page = page;
        self
    }

    /// Without this, `invoke` echoes the request payload back.
    pub fn with_invoke_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.invoke_payload = Some(payload.into());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: Call) -> LambdaResult<()> {
        self.calls.lock().unwrap().push(call);
        // let concurrent calls interleave
        tokio::task::yield_now().await;
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LambdaApi for FakeLambda {
    async fn create_function(
        &self,
        request: CreateFunctionRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        self.record(Call::Create(request)).await?;
        Ok(self.function.clone())
    }

    async fn update_function_configuration(
        &self,
        request: UpdateFunctionConfigurationRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        self.record(Call::UpdateConfig(request)).await?;
        Ok(self.function.clone())
    }

    async fn update_function_code(
        &self,
        request: UpdateFunctionCodeRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        self.record(Call::UpdateCode(request)).await?;
        Ok(self.function.clone())
    }

    async fn delete_function(&self, request: DeleteFunctionRequest) -> LambdaResult<()> {
        self.record(Call::Delete(request)).await
    }

    async fn get_function_configuration(
        &self,
        request: GetFunctionConfigurationRequest,
    ) -> LambdaResult<FunctionConfiguration> {
        self.record(Call::Get(request)).await?;
        Ok(self.function.clone())
    }

    async fn list_functions(&self) -> LambdaResult<ListFunctionsPage> {
        self.record(Call::List).await?;
        Ok(self.page.clone())
    }

    async fn invoke(&self, request: InvokeRequest) -> LambdaResult<InvokeResponse> {
        let payload = self
            .invoke_payload
            .clone()
            .unwrap_or_else(|| request.payload.clone());
        self.record(Call::Invoke(request)).await?;
        Ok(InvokeResponse {
            status_code: 200,
            function_error: None,
            payload: Some(payload),
        })
    }
}

/// A function as the service would describe it after creation.
pub fn sample_function(name: &str) -> FunctionConfiguration {
    FunctionConfiguration {
        function_name: Some(name.to_string()),
        function_arn: Some(format!(
            "arn:aws:lambda:us-east-1:123456789012:function:{name}"
        )),
        runtime: Some("nodejs18.x".to_string()),
        role: Some("arn:aws:iam::123456789012:role/lambda-exec".to_string()),
        handler: Some("index.handler".to_string()),
        timeout: Some(3),
        memory_size: Some(128),
        last_modified: Some("2024-01-15T10:30:00.000+0000".to_string()),
        version: Some("$LATEST".to_string()),
        state: Some("Pending".to_string()),
        ..FunctionConfiguration::default()
    }
}
