//! CLI entry point for spacegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spacegen")]
#[command(version)]
#[command(about = "Content pipeline for a personal blog/notes site", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new published article or note
    New {
        /// Kind of document (article, note)
        #[arg(short, long, default_value = "article")]
        kind: String,

        /// Title of the new document
        title: String,
    },

    /// Generate the content data files
    #[command(alias = "g")]
    Generate,

    /// List site content (articles, notes)
    List {
        #[arg(default_value = "articles")]
        r#type: String,
    },

    /// Clean the public folder
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "spacegen=debug,info"
    } else {
        "spacegen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            spacegen::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { kind, title } => {
            let site = spacegen::Site::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            spacegen::commands::new::create_document(&site, &kind, &title)?;
        }

        Commands::Generate => {
            let site = spacegen::Site::new(&base_dir)?;
            tracing::info!("Generating content data files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::List { r#type } => {
            let site = spacegen::Site::new(&base_dir)?;
            spacegen::commands::list::run(&site, &r#type)?;
        }

        Commands::Clean => {
            let site = spacegen::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
