//! MCP server lifecycle.
//!
//! 1. **Initialisation**: `initialize` request, then the
//!    `notifications/initialized` notification
//! 2. **Operation**: `tools/list`, `tools/call` and `ping`
//! 3. **Shutdown**: the host closes stdin, or SIGINT/SIGTERM arrives
//!
//! Messages are handled one at a time in arrival order. A failed tool call
//! is an ordinary response; nothing short of a transport I/O error stops the
//! loop.

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::mcp::dispatch::Dispatcher;
use crate::mcp::protocol::{
    parse_message, IncomingMessage, InitializeParams, JsonRpcError, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, RequestId, ServerCapabilities, ServerInfo, ToolCallParams,
    MCP_PROTOCOL_VERSION,
};
use crate::mcp::transport::{Line, StdioTransport, Transport};

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// The MCP server exposing Lambda management tools.
pub struct McpServer<R, W> {
    state: ServerState,
    transport: Transport<R, W>,
    dispatcher: Dispatcher,
}

impl McpServer<tokio::io::BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Creates a server speaking over stdin/stdout.
    #[must_use]
    pub fn stdio(dispatcher: Dispatcher) -> Self {
        Self::new(dispatcher, StdioTransport::stdio())
    }
}

impl<R, W> McpServer<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a server over an arbitrary transport.
    #[must_use]
    pub const fn new(dispatcher: Dispatcher, transport: Transport<R, W>) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport,
            dispatcher,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Serves until the input closes or a shutdown signal arrives.
    ///
    /// Signals are only observed while waiting for input, so a request that
    /// has been read is always answered in full.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    #[cfg(unix)]
    pub async fn run(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, initiating graceful shutdown");
                    break;
                }

                _ = sigterm.recv() => {
                    info!("Received SIGTERM, initiating graceful shutdown");
                    break;
                }

                line = self.transport.read_line() => {
                    if !self.handle_read(line?).await? {
                        return Ok(());
                    }
                }
            }
        }

        self.state = ServerState::ShuttingDown;
        Ok(())
    }

    /// Serves until the input closes or Ctrl+C arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    #[cfg(windows)]
    pub async fn run(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    break;
                }

                line = self.transport.read_line() => {
                    if !self.handle_read(line?).await? {
                        return Ok(());
                    }
                }
            }
        }

        self.state = ServerState::ShuttingDown;
        Ok(())
    }

    /// Serves until the input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn serve(&mut self) -> std::io::Result<()> {
        loop {
            let line = self.transport.read_line().await?;
            if !self.handle_read(line).await? {
                return Ok(());
            }
        }
    }

    /// Handles one read from the transport.
    ///
    /// Returns `false` once the input has closed.
    async fn handle_read(&mut self, line: Option<Line>) -> std::io::Result<bool> {
        match line {
            None => {
                debug!("Input closed");
                self.state = ServerState::ShuttingDown;
                Ok(false)
            }
            Some(Line::InvalidUtf8) => {
                warn!("Input line is not valid UTF-8");
                self.transport.write_message(&JsonRpcError::parse_error()).await?;
                Ok(true)
            }
            Some(Line::Text(text)) => {
                if !text.trim().is_empty() {
                    self.handle_line(&text).await?;
                }
                Ok(true)
            }
        }
    }

    async fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        let message = match parse_message(line) {
            Ok(message) => message,
            Err(error) => return self.transport.write_message(&error).await,
        };

        debug!(method = message.method(), "Received");
        match message {
            IncomingMessage::Request(req) => self.handle_request(req).await,
            IncomingMessage::Notification(notif) => {
                self.handle_notification(&notif);
                Ok(())
            }
        }
    }

    async fn handle_request(&mut self, req: JsonRpcRequest) -> std::io::Result<()> {
        debug!(id = %req.id, "Request");

        let response = match req.method.as_str() {
            "initialize" => self.handle_initialize(&req),
            "tools/list" => self.handle_tools_list(&req),
            "tools/call" => self.handle_tools_call(&req).await,
            "ping" => Ok(JsonRpcResponse::success(req.id.clone(), json!({}))),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        };

        match response {
            Ok(resp) => self.transport.write_message(&resp).await,
            Err(error) => self.transport.write_message(&error).await,
        }
    }

    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            self.state = ServerState::Running;
            info!("Client initialised");
        }
    }

    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::invalid_request(
                Some(req.id.clone()),
                "Server already initialised",
            ));
        }

        let params: InitializeParams = req.parse_params("initialize")?;
        info!(
            client = params.client_info.as_ref().map_or("unknown", |c| c.name.as_str()),
            requested_version = %params.protocol_version,
            "Initialising"
        );

        self.state = ServerState::Initialising;

        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({
                "protocolVersion": MCP_PROTOCOL_VERSION,
                "capabilities": ServerCapabilities::default(),
                "serverInfo": ServerInfo::default(),
            }),
        ))
    }

    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({ "tools": self.dispatcher.definitions() }),
        ))
    }

    async fn handle_tools_call(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = req.parse_params("tool call")?;
        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        let result = self.dispatcher.call(&params.name, arguments).await;

        let value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::internal_error(req.id.clone(), "Internal error: failed to serialise result")
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), value))
    }

    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::invalid_request(
                Some(id.clone()),
                "Server not initialised",
            ));
        }
        Ok(())
    }
}
