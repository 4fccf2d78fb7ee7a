//! CLI entry point for post-page

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "post-page")]
#[command(version)]
#[command(about = "Render blog post pages with social metadata", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// Render post files into HTML pages
    #[command(alias = "r")]
    Render {
        /// Post files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write pages to <OUTPUT>/<slug>/index.html instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered pages can be piped from stdout
    let filter = if cli.debug {
        "post_page=debug,info"
    } else {
        "post_page=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::Render { paths, output } => {
            let blog = post_page::Blog::new(&base_dir)?;
            tracing::debug!("Rendering {:?} for {}", paths, blog.config().name());
            let count = blog.render(&paths, output.as_deref())?;
            if let Some(dir) = output {
                eprintln!("Rendered {} page(s) into {:?}", count, dir);
            }
        }

        Commands::Version => {
            println!("post-page version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
