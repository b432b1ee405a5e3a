//! CLI entry point for spacetraveling-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spacetraveling")]
#[command(version)]
#[command(about = "Server-rendered blog front-end over a headless CMS", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides _config.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Check configuration and content API reachability
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "spacetraveling_rs=debug,info"
    } else {
        "spacetraveling_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Serve { port, ip } => {
            let blog = spacetraveling_rs::Blog::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| blog.config.server.ip.clone());
            let port = port.unwrap_or(blog.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog.serve(&ip, port).await?;
        }

        Commands::Check => {
            let blog = spacetraveling_rs::Blog::new(&base_dir)?;
            let state = blog.state()?;

            tracing::info!("Querying content API at {}", blog.config.api.url);
            let page = state.cms.query_posts(blog.config.api.page_size).await?;
            println!(
                "Content API reachable: {} post(s) on the first page",
                page.results.len()
            );
            if page.next_page.is_some() {
                println!("More pages available");
            }

            let uids = state
                .cms
                .list_uids(blog.config.api.paths_page_size)
                .await?;
            println!("{} known post path(s):", uids.len());
            for uid in uids {
                println!("  /post/{}", uid);
            }
        }

        Commands::Version => {
            println!("spacetraveling-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
