//! CLI entry point for postpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postpress::config::ContentConfig;
use postpress::content::ContentStore;

#[derive(Parser)]
#[command(name = "postpress")]
#[command(version)]
#[command(about = "A markdown content pipeline for file-backed blogs", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "postpress.yml")]
    config: PathBuf,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts
    List {
        /// Show only the N most recent posts, newest first
        #[arg(short, long)]
        recent: Option<usize>,
    },

    /// Render a post to HTML
    Show {
        /// Slug of the post to render
        slug: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "postpress=debug,info"
    } else {
        "postpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing config file falls back to defaults rooted at ./posts
    let config = if cli.config.exists() {
        ContentConfig::load(&cli.config)?
    } else {
        ContentConfig::default()
    };

    match cli.command {
        Commands::List { recent } => {
            let store = ContentStore::new(config)?;
            postpress::commands::list::run(&store, recent)?;
        }

        Commands::Show { slug } => {
            let store = ContentStore::new(config)?;
            postpress::commands::show::run(&store, &slug)?;
        }

        Commands::New { title } => {
            tracing::info!("creating new post: {}", title);
            postpress::commands::new::run(&config, &title)?;
        }
    }

    Ok(())
}
