use std::path::PathBuf;

use ayra_config::Config;
use ayra_core::Conversation;
use tracing::info;

/// Input parameters for the Process command strategy.
#[derive(Debug, Clone)]
pub struct ProcessInput {
    /// Conversation transcript JSON file.
    pub file: PathBuf,
}

/// Strategy for saving a conversation and extracting activities from it.
///
/// The transcript is persisted first; extraction reports per-kind outcomes
/// even when some kinds fail.
#[derive(Debug, Clone, Copy)]
pub struct ProcessStrategy;

impl super::CommandStrategy for ProcessStrategy {
    type Input = ProcessInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let orchestrator = super::open_orchestrator(&config).await?;

        let content = std::fs::read_to_string(&input.file)?;
        let conversation: Conversation = serde_json::from_str(&content)?;

        info!(
            "Processing conversation {} ({})",
            conversation.id, conversation.vertical
        );

        let report = orchestrator.save_and_process(conversation).await?;

        println!("{}", serde_json::to_string_pretty(&report)?);
        if report.has_failures() {
            anyhow::bail!("one or more activity kinds failed to persist");
        }
        Ok(())
    }
}
