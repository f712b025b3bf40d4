//! showroom entry point
//!
//! Parses CLI flags (all overridable via environment variables),
//! initializes logging, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use showroom::config::{Environment, ServerConfig};
use showroom::server::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "showroom", version, about = "In-memory CRUD REST API")]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port for the listening socket
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Deployment mode; development exposes internal error detail
    #[arg(long = "env", env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    environment: Environment,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("showroom=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        env: cli.environment,
    };

    if let Err(e) = HttpServer::new(config).start().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
