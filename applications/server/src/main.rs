/// Roster Server - user resource HTTP service
use clap::{Parser, Subcommand};
use roster_core::{CreateUser, UserId};
use roster_server::{config::ServerConfig, open_store};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user resource server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create a new user directly in the configured store
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Requested id (assigned by the store when omitted)
        #[arg(long)]
        id: Option<i64>,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List all users
    ListUsers {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::AddUser { name, id, config } => {
            add_user(name, id, config).await?;
        }
        Commands::ListUsers { config } => {
            list_users(config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Storage backend: {:?}", config.storage.backend);
    tracing::info!("Create response: {:?}", config.api.create_response);

    roster_server::run(config).await?;

    Ok(())
}

async fn add_user(name: String, id: Option<i64>, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config.storage).await?;

    let mut request = CreateUser::new(name);
    if let Some(id) = id {
        request = request.with_id(UserId::new(id));
    }

    match store.save(request).await? {
        Some(user) => println!("Created user {} - {}", user.id, user.name().unwrap_or("-")),
        None => anyhow::bail!("User id {} is already taken", id.unwrap_or_default()),
    }

    Ok(())
}

async fn list_users(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config.storage).await?;

    let users = store.list_all().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.name().unwrap_or("-"));
    }

    Ok(())
}
