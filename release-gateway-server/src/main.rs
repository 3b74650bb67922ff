//! Release Gateway Server - Headless Daemon
//!
//! Re-exposes the GitHub releases API and tag-based asset downloads under a
//! single origin:
//! - `/{owner}/{repo}/releases[/...]` → forwarded to the upstream API host
//! - `/{owner}/{repo}/download/tags/{tag}/{name}` → redirect resolved, asset streamed
//!
//! Access via: http://localhost:80

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod router;
mod server_utils;

use cli::{Cli, Commands};
use release_gateway_core::proxy::{GatewayState, UpstreamClient};
use release_gateway_types::{GatewayConfig, RouteParams};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = cli.gateway.into_config();
    config.validate_all()?;

    match cli.command {
        None | Some(Commands::Serve) => serve(config).await,
        Some(Commands::Resolve { owner, repo, tag, name }) => {
            let params = RouteParams { owner, repo, id: None, tag: Some(tag), name: Some(name) };
            resolve(&config, &params).await
        },
        Some(Commands::ShowConfig { json }) => show_config(&config, json),
    }
}

async fn serve(config: GatewayConfig) -> Result<()> {
    info!("🚀 Release Gateway starting on port {}...", config.port);
    info!("🔀 Release API upstream: {}", config.upstream.api_base_url);
    info!("📦 Download redirector: {}", config.upstream.download_base_url);

    let state = GatewayState::from_config(&config.upstream)?;
    let app = router::build_router(state);

    let listener = server_utils::create_listener(&config).await?;
    info!("🌐 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(server_utils::shutdown_signal())
        .await?;

    info!("✅ Server stopped");
    Ok(())
}

async fn resolve(config: &GatewayConfig, params: &RouteParams) -> Result<()> {
    let asset = params.asset()?;
    let client = UpstreamClient::from_config(&config.upstream)?;
    let location = client.resolve_download(&asset).await?;
    println!("{}", location);
    Ok(())
}

fn show_config(config: &GatewayConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("bind_address          {}", config.bind_address);
    println!("port                  {}", config.port);
    println!("api_base_url          {}", config.upstream.api_base_url);
    println!("download_base_url     {}", config.upstream.download_base_url);
    println!("insecure_skip_verify  {}", config.upstream.insecure_skip_verify);
    println!("connect_timeout_secs  {}", config.upstream.connect_timeout_secs);
    println!("probe_timeout_secs    {}", config.upstream.probe_timeout_secs);
    println!("response_timeout_secs {}", config.upstream.response_timeout_secs);
    Ok(())
}
