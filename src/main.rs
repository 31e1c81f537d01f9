mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdir_core::{EventDir, EventDirConfig};

use crate::commands::EventArgs;

#[derive(Parser)]
#[command(name = "eventdir")]
#[command(about = "Manage the events and image catalog in a local eventdir data directory")]
struct Cli {
    /// Use this data directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create empty events.json and images.json if they are missing
    Init,
    /// List events, oldest first
    List {
        /// Only events whose title, description or location contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only the last N matching events
        #[arg(short, long)]
        max: Option<usize>,
    },
    /// Show one event in full
    Show { id: String },
    /// Create a new event
    New {
        #[command(flatten)]
        event: EventArgs,
    },
    /// Replace an event with the given fields
    Edit {
        id: String,

        #[command(flatten)]
        event: EventArgs,
    },
    /// Delete an event
    Delete { id: String },
    /// List the image catalog
    Images,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EventDirConfig::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let eventdir = EventDir::open(config);

    match cli.command {
        Commands::Init => commands::init::run(&eventdir).await,
        Commands::List { search, max } => commands::list::run(&eventdir, search, max).await,
        Commands::Show { id } => commands::show::run(&eventdir, &id).await,
        Commands::New { event } => commands::new::run(&eventdir, event).await,
        Commands::Edit { id, event } => commands::edit::run(&eventdir, &id, event).await,
        Commands::Delete { id } => commands::delete::run(&eventdir, &id).await,
        Commands::Images => commands::images::run(&eventdir).await,
        Commands::Config => commands::config::run(&eventdir),
    }
}
