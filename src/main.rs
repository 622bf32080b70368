//! CLI entry point for mdxsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdxsite")]
#[command(version = "0.1.0")]
#[command(about = "A minimal personal site generator for MDX-flavored markdown posts", long_about = None)]
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
    /// Build the static site
    #[command(alias = "b")]
    Build {
        /// Watch for file changes and rebuild
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Path for the new post (overrides the configured filename pattern)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// List the discovered posts
    List,

    /// Clean the public folder
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdxsite=debug,info"
    } else {
        "mdxsite=info"
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
        Commands::Build { watch } => {
            let site = mdxsite::Site::new(&base_dir)?;
            tracing::info!("Building site...");

            site.build()?;
            println!("Built successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                mdxsite::commands::build::watch(&site).await?;
            }
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = mdxsite::Site::new(&base_dir)?;

            // Build first
            tracing::info!("Building site...");
            site.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            mdxsite::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::New { title, path } => {
            let site = mdxsite::Site::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            site.new_post(&title, path.as_deref())?;
        }

        Commands::List => {
            let site = mdxsite::Site::new(&base_dir)?;
            mdxsite::commands::list::run(&site)?;
        }

        Commands::Clean => {
            let site = mdxsite::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
