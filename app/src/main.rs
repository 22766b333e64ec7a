#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InitStrategy, ProcessAllStrategy,
    ProcessInput, ProcessStrategy, UpcomingInput, UpcomingStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "ayra")]
#[command(about = "Ayra conversation intelligence pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a conversation transcript and extract activities from it
    Process {
        /// Path to a conversation JSON file
        file: PathBuf,
    },
    /// Re-run extraction for a stored conversation
    Extract {
        /// Conversation id (conv-prefixed)
        id: String,
    },
    /// Re-run extraction over every stored conversation
    ProcessAll,
    /// Show the merged upcoming-activity feed
    Upcoming {
        /// Maximum entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Process { file } => ProcessStrategy.execute(ProcessInput { file }).await,
        Commands::Extract { id } => ExtractStrategy.execute(ExtractInput { id }).await,
        Commands::ProcessAll => ProcessAllStrategy.execute(()).await,
        Commands::Upcoming { limit } => UpcomingStrategy.execute(UpcomingInput { limit }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
