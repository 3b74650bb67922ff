use clap::{Args, Parser, Subcommand};
use release_gateway_types::models::config::{DEFAULT_API_BASE_URL, DEFAULT_DOWNLOAD_BASE_URL};
use release_gateway_types::{GatewayConfig, UpstreamConfig};

#[derive(Parser)]
#[command(
    name = "release-gateway",
    about = "Release Gateway - GitHub release API and asset proxy",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub gateway: GatewayArgs,

    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the gateway (default if no command specified)")]
    Serve,

    #[command(about = "Resolve a tag download to its asset location without downloading")]
    Resolve {
        #[arg(help = "Repository owner")]
        owner: String,

        #[arg(help = "Repository name")]
        repo: String,

        #[arg(help = "Release tag")]
        tag: String,

        #[arg(help = "Asset file name")]
        name: String,
    },

    #[command(about = "Print the effective configuration")]
    ShowConfig {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GatewayArgs {
    #[arg(short, long, env = "RELEASE_GATEWAY_PORT", default_value = "80", global = true)]
    pub port: u16,

    #[arg(long = "bind", env = "RELEASE_GATEWAY_BIND", default_value = "0.0.0.0", global = true)]
    pub bind_address: String,

    #[arg(long, env = "RELEASE_GATEWAY_API_BASE_URL", default_value = DEFAULT_API_BASE_URL, global = true)]
    pub api_base_url: String,

    #[arg(
        long,
        env = "RELEASE_GATEWAY_DOWNLOAD_BASE_URL",
        default_value = DEFAULT_DOWNLOAD_BASE_URL,
        global = true
    )]
    pub download_base_url: String,

    #[arg(
        long,
        env = "RELEASE_GATEWAY_INSECURE",
        default_value_t = true,
        action = clap::ArgAction::Set,
        help = "Skip TLS certificate verification on upstream calls",
        global = true
    )]
    pub insecure_skip_verify: bool,

    #[arg(long = "connect-timeout", env = "RELEASE_GATEWAY_CONNECT_TIMEOUT", default_value = "10", global = true)]
    pub connect_timeout_secs: u64,

    #[arg(long = "probe-timeout", env = "RELEASE_GATEWAY_PROBE_TIMEOUT", default_value = "30", global = true)]
    pub probe_timeout_secs: u64,

    #[arg(long = "response-timeout", env = "RELEASE_GATEWAY_RESPONSE_TIMEOUT", default_value = "60", global = true)]
    pub response_timeout_secs: u64,
}

impl GatewayArgs {
    pub fn into_config(self) -> GatewayConfig {
        GatewayConfig {
            bind_address: self.bind_address,
            port: self.port,
            upstream: UpstreamConfig {
                api_base_url: self.api_base_url,
                download_base_url: self.download_base_url,
                insecure_skip_verify: self.insecure_skip_verify,
                connect_timeout_secs: self.connect_timeout_secs,
                probe_timeout_secs: self.probe_timeout_secs,
                response_timeout_secs: self.response_timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_gateway_config() {
        let cli = Cli::try_parse_from(["release-gateway"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.gateway.into_config(), GatewayConfig::default());
    }

    #[test]
    fn test_port_and_tls_flags() {
        let cli = Cli::try_parse_from([
            "release-gateway",
            "-p",
            "8080",
            "--insecure-skip-verify",
            "false",
            "--probe-timeout",
            "5",
        ])
        .unwrap();
        let config = cli.gateway.into_config();

        assert_eq!(config.port, 8080);
        assert!(!config.upstream.insecure_skip_verify);
        assert_eq!(config.upstream.probe_timeout_secs, 5);
    }

    #[test]
    fn test_resolve_subcommand() {
        let cli =
            Cli::try_parse_from(["release-gateway", "resolve", "octocat", "hello-world", "v1.0.0", "hello.tar.gz"])
                .unwrap();
        match cli.command {
            Some(Commands::Resolve { owner, tag, .. }) => {
                assert_eq!(owner, "octocat");
                assert_eq!(tag, "v1.0.0");
            },
            _ => panic!("expected resolve subcommand"),
        }
    }
}
