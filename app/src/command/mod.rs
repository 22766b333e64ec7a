//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, enabling static
//! dispatch with no boxing at the call site.

use std::sync::Arc;

use ayra_config::Config;
use ayra_core::ActivityStore;
use ayra_pipeline::Orchestrator;
use ayra_store::{MemStore, StorageEngine};
use tracing::info;

mod extract;
mod init;
mod process;
mod process_all;
mod upcoming;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use init::InitStrategy;
pub use process::{ProcessInput, ProcessStrategy};
pub use process_all::ProcessAllStrategy;
pub use upcoming::{UpcomingInput, UpcomingStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type, so
/// parameters stay type-safe without runtime casting.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Build the orchestrator over the configured store.
///
/// `database.in_memory` keeps everything in process memory, useful for
/// trying extraction without a database.
async fn open_orchestrator(config: &Config) -> anyhow::Result<Orchestrator> {
    let store: Arc<dyn ActivityStore> = if config.database.in_memory {
        info!("Using in-memory store; nothing will be persisted");
        Arc::new(MemStore::new())
    } else {
        Arc::new(StorageEngine::new(&config.database.url).await?)
    };

    Ok(Orchestrator::new(store))
}
