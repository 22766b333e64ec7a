//! Per-conversation extraction entry point.

use std::sync::Arc;
use tracing::{info, warn};

use ayra_core::{
    ActivityStore, ChangeHook, Conversation, ExtractionReport, FeedEntry, Outcome,
};

use crate::aggregate;
use crate::materialize::{Materialized, Materializer};

/// Runs the extractor for a conversation's vertical and materializes every
/// non-null candidate.
///
/// `process` keeps no "already processed" memory; calling it again for the
/// same conversation is safe because the dedup gate suppresses the rows it
/// already created.
pub struct Orchestrator {
    store: Arc<dyn ActivityStore>,
    materializer: Materializer,
}

impl Orchestrator {
    #[must_use]
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            materializer: Materializer::new(store.clone()),
            store,
        }
    }

    /// Attach the data-changed hook passed through to the materializer.
    #[must_use]
    pub fn with_change_hook(mut self, hook: ChangeHook) -> Self {
        self.materializer = Materializer::new(self.store.clone()).with_change_hook(hook);
        self
    }

    /// Process one conversation. Kinds are attempted in the vertical's
    /// fixed order; a failure for one kind never prevents the next.
    pub async fn process(&self, conversation: &Conversation) -> ExtractionReport {
        let mut report = ExtractionReport::new(conversation.id.clone());

        for &kind in conversation.vertical.kinds() {
            match ayra_extraction::extract(&conversation.turns, kind) {
                None => report.record(kind, Outcome::NoCandidate),
                Some(candidate) => {
                    match self.materializer.materialize(candidate, &conversation.id).await {
                        Ok(Materialized::Created(activity)) => report.record(kind, Outcome::Created {
                            id: activity.id().to_string(),
                        }),
                        Ok(Materialized::Duplicate) => report.record(kind, Outcome::Duplicate),
                        Err(err) => {
                            warn!(
                                "Failed to materialize {kind} from conversation {}: {err}",
                                conversation.id
                            );
                            report.record(kind, Outcome::Failed {
                                error: err.to_string(),
                            });
                        }
                    }
                }
            }
        }

        report
    }

    /// Persist a finished conversation, then run extraction over it.
    pub async fn save_and_process(
        &self,
        conversation: Conversation,
    ) -> anyhow::Result<ExtractionReport> {
        let saved = self.store.insert_conversation(conversation).await?;
        Ok(self.process(&saved).await)
    }

    /// Re-run extraction for a stored conversation. `None` when the id is
    /// unknown.
    pub async fn extract_by_id(&self, id: &str) -> anyhow::Result<Option<ExtractionReport>> {
        let Some(conversation) = self.store.find_conversation(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.process(&conversation).await))
    }

    /// Re-scan every stored conversation. The dedup gate makes this safe
    /// to run at any time.
    pub async fn process_all(&self) -> anyhow::Result<Vec<ExtractionReport>> {
        info!("Processing stored conversations to extract booking data");
        let conversations = self.store.list_conversations().await?;

        let mut reports = Vec::with_capacity(conversations.len());
        for conversation in &conversations {
            reports.push(self.process(conversation).await);
        }
        Ok(reports)
    }

    /// The merged upcoming feed, soonest first.
    pub async fn list_upcoming(&self, limit: usize) -> anyhow::Result<Vec<FeedEntry>> {
        aggregate::list_upcoming(self.store.as_ref(), limit).await
    }
}
