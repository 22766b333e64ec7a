use ayra_config::Config;
use tracing::info;

/// Strategy for sweeping every stored conversation through extraction.
///
/// Used after rule changes or to backfill conversations recorded before
/// extraction existed. Existing activities show up as duplicates.
#[derive(Debug, Clone, Copy)]
pub struct ProcessAllStrategy;

impl super::CommandStrategy for ProcessAllStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let orchestrator = super::open_orchestrator(&config).await?;

        let reports = orchestrator.process_all().await?;
        let created: usize = reports.iter().map(|r| r.created_ids().len()).sum();

        info!(
            "Swept {} conversations, {} new activities",
            reports.len(),
            created
        );
        println!("{}", serde_json::to_string_pretty(&reports)?);
        Ok(())
    }
}
