//! Combined binary for development - runs both services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rust-api")]
#[command(about = "Combined users and sales binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve users and sales from one router, checking users in-process
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8080")]
        port: u16,
    },
    /// Run both services on separate ports, checking users over HTTP
    Split {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8080")]
        user_port: u16,
        #[arg(long, default_value = "8081")]
        sales_port: u16,
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
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            info!("Starting co-located users and sales on http://{}:{}", host, port);
            combined::run_co_located(&host, port).await?;
        }
        Commands::Split {
            host,
            user_port,
            sales_port,
        } => {
            info!("Starting split services in development mode");
            info!("  User service:  http://{}:{}", host, user_port);
            info!("  Sales service: http://{}:{}", host, sales_port);

            // Spawn user-service first (sales depends on it)
            let user_host = host.clone();
            let user_handle = tokio::spawn(async move {
                if let Err(e) = user_service_lib::run_embedded(&user_host, user_port).await {
                    error!("User service failed: {}", e);
                }
            });

            // Spawn sales-service pointed at the local user-service
            let sales_host = host.clone();
            let sales_handle = tokio::spawn(async move {
                if let Err(e) =
                    sales_service_lib::run_embedded(&sales_host, sales_port, user_port).await
                {
                    error!("Sales service failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = user_handle => {
                    error!("User service exited unexpectedly");
                }
                _ = sales_handle => {
                    error!("Sales service exited unexpectedly");
                }
            }
        }
    }

    Ok(())
}
