use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_dashboard::api;
use launch_dashboard::config::{ServerConfig, DEFAULT_DATA_PATH, DEFAULT_PORT};
use launch_dashboard::engine;
use launch_dashboard::models::SiteSelection;
use launch_dashboard::table::LaunchTable;

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive launch records dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve(ServeArgs),
    /// Print per-site launch counts and payload bounds, then exit
    Summary {
        /// CSV file with the launch records
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },
}

#[derive(Args)]
struct ServeArgs {
    /// CSV file with the launch records
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for the HTTP server
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            data_path: args.data,
            host: args.host,
            port: args.port,
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
        |_| "launch_dashboard=debug,dashboard_core=info,tower_http=debug".into(),
    ));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    // A table that cannot be loaded is fatal: nothing is served without it.
    let table = LaunchTable::load_csv(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;

    let app = api::create_router(Arc::new(table));

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Launch dashboard listening on {}", config.url());

    axum::serve(listener, app).await?;
    Ok(())
}

fn summary(data: PathBuf) -> anyhow::Result<()> {
    let table = LaunchTable::load_csv(&data)?;
    let bounds = table.payload_bounds();
    let breakdown = engine::compute_success_breakdown(&table, &SiteSelection::All);

    println!("{} launches from {}", table.len(), data.display());
    println!("Payload mass: {} - {} kg", bounds.low(), bounds.high());
    for site in table.sites() {
        let launches = table
            .records()
            .iter()
            .filter(|r| &r.launch_site == site)
            .count();
        let successes = breakdown
            .as_pie()
            .and_then(|pie| pie.value_of(site))
            .unwrap_or(0);
        println!("  {site:<16} {launches:>4} launches, {successes:>4} successful");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve(args)) => {
            let config = ServerConfig::from(args);
            tracing::info!("Starting launch dashboard on port {}", config.port);
            serve(config).await?;
        }
        Some(Commands::Summary { data }) => summary(data)?,
        None => {
            // Default: serve the default data file on the default port
            let config = ServerConfig::default();
            tracing::info!("Starting launch dashboard on port {}", config.port);
            serve(config).await?;
        }
    }

    Ok(())
}
