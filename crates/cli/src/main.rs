//! Filedock CLI
//!
//! Terminal front end for the Filedock file-storage client: maps
//! subcommands onto the engine's operations and renders the derived view.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use api::{ListingCriteria, SortKey, Visibility, VisibilityFilter};
use client::{ClientConfig, FileManager, HttpGateway, SessionStore};

mod ui;

/// Filedock - client for the Filedock file-storage service.
#[derive(Parser, Debug)]
#[command(name = "filedock")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List your files
    List {
        /// Show only names containing this text (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Restrict by visibility: all, public or private
        #[arg(long, default_value = "all")]
        filter: VisibilityFilter,

        /// Sort order: newest, oldest, name_asc, name_desc, size_asc, size_desc
        #[arg(long, default_value = "newest")]
        sort: SortKey,
    },

    /// Show storage statistics
    Stats,

    /// Upload a file
    Upload {
        /// Path of the file to upload
        path: PathBuf,

        /// Publish the file right after uploading
        #[arg(long)]
        public: bool,
    },

    /// Flip a file between public and private
    Toggle {
        /// Id of the file to flip
        id: String,
    },

    /// Delete one or more files
    Delete {
        /// Ids of the files to delete
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Print the download link for a file
    Share {
        /// Id of the file to share
        id: String,
    },

    /// Forget the stored session
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        ClientConfig::load(config_path)?
    } else {
        ClientConfig::load_default()?
    };

    // Apply environment variable overrides
    config.apply_env_overrides();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let sessions = SessionStore::with_default_paths();

    if let Commands::Logout = cli.command {
        sessions.clear().context("Failed to clear session")?;
        println!("Signed out.");
        return Ok(());
    }

    let Some(session) = sessions.load() else {
        eprintln!("No session found. Sign in first, or place a session blob where the client expects it.");
        std::process::exit(1);
    };
    tracing::debug!("Signed in as {} ({})", session.user.name, session.user.role);

    let gateway = HttpGateway::new(&config.api_base, &session.token);
    let mut manager = FileManager::new(gateway);
    manager.refresh().await?;

    match cli.command {
        Commands::List { search, filter, sort } => {
            manager.store_mut().set_criteria(ListingCriteria {
                search_text: search.unwrap_or_default(),
                visibility_filter: filter,
                sort_key: sort,
            });
            ui::print_listing(&manager.store().visible_files());
        }

        Commands::Stats => {
            ui::print_summary(&manager.store().summary(), &session.user);
        }

        Commands::Upload { path, public } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = file_name_of(&path);
            let desired = if public {
                Visibility::Public
            } else {
                Visibility::Private
            };

            let created = manager
                .upload(&name, guess_mime(&name), bytes, desired)
                .await?;
            println!("Uploaded {} ({}).", created.original_name, created.id);
        }

        Commands::Toggle { id } => {
            let visibility = manager.toggle_visibility(&id).await?;
            println!("File {} is now {}.", id, visibility);
        }

        Commands::Delete { ids } => {
            if ids.len() == 1 {
                manager.delete_one(&ids[0]).await?;
                println!("Deleted {}.", ids[0]);
            } else {
                let deleted = manager.delete_many(&ids).await?;
                println!("Deleted {deleted} files.");
            }
        }

        Commands::Share { id } => {
            if manager.store().get(&id).is_none() {
                anyhow::bail!("no file with id {id} in the current listing");
            }
            // Requires a session to fetch; a public sharing endpoint would
            // hand out tokenless links instead.
            println!("{}", manager.share_link(&id));
        }

        Commands::Logout => unreachable!("handled before sign-in"),
    }

    Ok(())
}

/// Final path component, used as the upload name.
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "file.bin".to_string())
}

/// Best-effort content type from the file name.
fn guess_mime(name: &str) -> &'static str {
    match name.rsplit('.').next().map(str::to_lowercase).as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("txt") | Some("md") => "text/plain",
        Some("json") => "application/json",
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}
