//! Per-conversation extraction outcome reporting.

use serde::{Deserialize, Serialize};

use crate::activity::ActivityKind;

/// What happened for one attempted kind. Duplicates and missing candidates
/// are normal control flow, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The extractor found nothing valid for this kind.
    NoCandidate,
    /// A new activity was written.
    Created { id: String },
    /// The dedup gate suppressed a substantially-identical activity.
    Duplicate,
    /// Storage failed for this kind; sibling kinds are unaffected.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindOutcome {
    pub kind: ActivityKind,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Result of processing one conversation, one entry per attempted kind in
/// the vertical's fixed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub conversation_id: String,
    pub outcomes: Vec<KindOutcome>,
}

impl ExtractionReport {
    #[must_use]
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: ActivityKind, outcome: Outcome) {
        self.outcomes.push(KindOutcome { kind, outcome });
    }

    /// Ids of activities created by this run.
    #[must_use]
    pub fn created_ids(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.outcome {
                Outcome::Created { id } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o.outcome, Outcome::Failed { .. }))
    }
}
