use anyhow::Result;
use listenfd::ListenFd;
use release_gateway_types::GatewayConfig;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

pub async fn create_listener(config: &GatewayConfig) -> Result<tokio::net::TcpListener> {
    let mut listenfd = ListenFd::from_env();

    if let Some(listener) = listenfd.take_tcp_listener(0)? {
        info!("🔌 Gateway listener inherited from systemd (fd=3)");
        listener.set_nonblocking(true)?;
        return Ok(tokio::net::TcpListener::from_std(listener)?);
    }

    let addr = parse_bind_addr(config)?;
    let domain = if addr.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(4096)?;

    info!("🔌 Gateway listener bound to {} (SO_REUSEPORT)", addr);

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

fn parse_bind_addr(config: &GatewayConfig) -> Result<SocketAddr> {
    let ip: std::net::IpAddr = config
        .bind_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", config.bind_address, e))?;
    Ok(SocketAddr::new(ip, config.port))
}

/// Resolves once the process is asked to stop; in-flight asset streams are
/// then drained by `axum::serve`.
pub async fn shutdown_signal() {
    let received = wait_for_stop_signal().await;
    info!("🛑 {} received, release gateway no longer accepting requests", received);
    info!("⏳ Waiting for in-flight release downloads to finish...");
}

#[allow(
    clippy::expect_used,
    reason = "Signal handlers are critical infrastructure, panic is appropriate on failure"
)]
async fn wait_for_stop_signal() -> &'static str {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => "Ctrl+C",
        () = terminate => "SIGTERM",
    }
}
