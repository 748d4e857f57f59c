use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use islandwind_client::{ClientConfig, HttpClient, PostFilter, PostInput, PostPatch};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "islandwind", version, about = "Command line client for the islandwind blog API")]
struct Cli {
    /// Overrides ISLANDWIND_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Overrides ISLANDWIND_API_TIMEOUT
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long, env = "ISLANDWIND_USERNAME", default_value = "")]
    username: String,

    #[arg(
        long,
        env = "ISLANDWIND_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List posts
    List {
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        last_seen: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        deleted: Option<bool>,
        /// Keep fetching until the last page
        #[arg(long)]
        all: bool,
    },
    /// Show a single post
    Get { id: String },
    /// Create a post (requires credentials)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        published: bool,
    },
    /// Update a post (requires credentials)
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        published: Option<bool>,
        #[arg(long)]
        deleted: Option<bool>,
    },
    /// Delete a post (requires credentials)
    Delete {
        id: String,
        /// Remove permanently instead of soft deleting
        #[arg(long)]
        purge: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn config_from(cli: &Cli) -> ClientConfig {
    let env_config = ClientConfig::from_env();
    let config = match &cli.api_url {
        Some(url) => ClientConfig::new(url.as_str()).with_timeout(env_config.timeout()),
        None => env_config,
    };
    match cli.timeout_ms {
        Some(ms) => config.with_timeout(Duration::from_millis(ms)),
        None => config,
    }
}

impl Command {
    fn needs_session(&self) -> bool {
        matches!(
            self,
            Command::Create { .. } | Command::Update { .. } | Command::Delete { .. }
        )
    }
}

async fn run(client: &HttpClient, command: Command) -> Result<()> {
    match command {
        Command::List {
            page_size,
            last_seen,
            title,
            deleted,
            all,
        } => {
            let mut filter = PostFilter {
                page_size,
                title,
                deleted,
                last_seen,
                ..PostFilter::default()
            };
            loop {
                let page = client.blogposts.list_page(&filter).await?;
                print_json(&page)?;

                match filter.after(&page) {
                    Some(next) if all => filter = next,
                    _ => break,
                }
            }
        }
        Command::Get { id } => {
            print_json(&client.blogposts.get(&id).await?)?;
        }
        Command::Create {
            title,
            content,
            published,
        } => {
            let input = PostInput::new(title, content, published);
            print_json(&client.blogposts.post(&input).await?)?;
        }
        Command::Update {
            id,
            title,
            content,
            published,
            deleted,
        } => {
            let patch = PostPatch {
                id,
                title,
                content,
                published,
                deleted,
            };
            print_json(&client.blogposts.patch(&patch).await?)?;
        }
        Command::Delete { id, purge } => {
            print_json(&client.blogposts.delete(&id, purge).await?)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = config_from(&cli);
    tracing::info!("Using API at {}", config.base_url());

    let client = HttpClient::new(config).context("Failed to build HTTP client")?;

    let needs_session = cli.command.needs_session();
    if needs_session {
        client
            .login(&cli.username, &cli.password)
            .await
            .context("Login failed")?;
    }

    let result = run(&client, cli.command).await;

    if needs_session {
        if let Err(e) = client.logout().await {
            tracing::warn!("Logout failed, local session purged anyway: {}", e);
        }
    }

    result
}
