//! lambda-deployer-mcp: MCP server for AWS Lambda function management.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use lambda_deployer_mcp::config;
use lambda_deployer_mcp::lambda::{ClientSettings, SdkLambdaClient};
use lambda_deployer_mcp::mcp::{Dispatcher, McpServer};

/// MCP server exposing AWS Lambda function management as tools.
///
/// Credentials are resolved by the AWS SDK's default provider chain.
#[derive(Parser, Debug)]
#[command(name = "lambda-deployer-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// AWS region (overrides AWS_REGION and the config file)
    #[arg(long)]
    region: Option<String>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber. stdout carries protocol messages, so
/// logs go to stderr.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(get_log_level(args.verbose, args.quiet, &cfg.logging.level));

    let env_region = std::env::var("AWS_REGION").ok();
    let settings = ClientSettings {
        region: cfg.resolve_region(args.region.as_deref(), env_region.as_deref()),
        profile: cfg.aws.profile.clone(),
        endpoint_url: cfg.aws.endpoint_url.clone(),
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        region = %settings.region,
        "Starting lambda-deployer-mcp server"
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        let lambda = SdkLambdaClient::from_settings(&settings).await;
        let dispatcher = Dispatcher::with_lambda_tools(Arc::new(lambda));
        let mut server = McpServer::stdio(dispatcher);

        eprintln!("Lambda MCP Server running on stdio");
        server.run().await
    });

    match result {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
