use ayra_config::Config;

/// Input parameters for the Upcoming command strategy.
#[derive(Debug, Clone, Copy)]
pub struct UpcomingInput {
    /// Entry cap; falls back to the configured feed default.
    pub limit: Option<usize>,
}

/// Strategy for printing the merged upcoming-activity feed.
#[derive(Debug, Clone, Copy)]
pub struct UpcomingStrategy;

impl super::CommandStrategy for UpcomingStrategy {
    type Input = UpcomingInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let orchestrator = super::open_orchestrator(&config).await?;

        let limit = input.limit.unwrap_or(config.feed.default_limit);
        let feed = orchestrator.list_upcoming(limit).await?;

        println!("{}", serde_json::to_string_pretty(&feed)?);
        Ok(())
    }
}
