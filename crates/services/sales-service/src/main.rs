//! Sales Service - HTTP server for the sales ledger.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_service_lib::config::SalesServiceConfig;

#[derive(Parser)]
#[command(name = "sales-service")]
#[command(about = "Sales ledger microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "SALES_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "SALES_SERVICE_PORT", default_value = "8081")]
        port: u16,
        /// Base URL of the user service
        #[arg(long)]
        user_service_url: Option<String>,
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
        Commands::Serve {
            host,
            port,
            user_service_url,
        } => {
            let mut config = SalesServiceConfig::from_env();
            config.host = host;
            config.port = port;
            if let Some(url) = user_service_url {
                config.user_service.base_url = url;
            }
            sales_service_lib::run_server_with_config(config).await?;
        }
    }

    Ok(())
}
