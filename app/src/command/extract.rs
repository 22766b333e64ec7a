use ayra_config::Config;
use tracing::info;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Id of a stored conversation.
    pub id: String,
}

/// Strategy for re-running extraction on one stored conversation.
///
/// Re-running is safe: the dedup gate reports previously created
/// activities as duplicates instead of writing them again.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let orchestrator = super::open_orchestrator(&config).await?;

        info!("Re-extracting conversation {}", input.id);

        match orchestrator.extract_by_id(&input.id).await? {
            Some(report) => {
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
            None => anyhow::bail!("no conversation with id {}", input.id),
        }
    }
}
