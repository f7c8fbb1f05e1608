//! User Service - HTTP server for the user registry.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User registry microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "USER_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "USER_SERVICE_PORT", default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = UserServiceConfig { host, port };
            user_service_lib::run_server_with_config(config).await?;
        }
    }

    Ok(())
}
