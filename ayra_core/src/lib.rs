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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

pub mod activity;
pub mod report;
pub mod store;

pub use activity::{
    Activity, ActivityKind, Appointment, AppointmentDraft, Candidate, FeedEntry, Fulfillment,
    Order, OrderDraft, OrderItem, Reminder, ReminderDraft, Reservation, ReservationDraft,
    TERMINAL_ORDER_STATUSES,
};
pub use report::{ExtractionReport, KindOutcome, Outcome};
pub use store::{ActivityStore, ChangeHook};

/// The business domain a conversation belongs to. Determines which
/// activity kinds extraction attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Restaurant,
    Hospital,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown vertical: {0}")]
pub struct ParseVerticalError(String);

impl Vertical {
    /// The activity kinds attempted for this vertical, in processing order.
    #[must_use]
    pub const fn kinds(self) -> &'static [ActivityKind] {
        match self {
            Self::Restaurant => &[ActivityKind::Reservation, ActivityKind::Order],
            Self::Hospital => &[ActivityKind::Appointment, ActivityKind::Reminder],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Hospital => "hospital",
        }
    }
}

impl FromStr for Vertical {
    type Err = ParseVerticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(Self::Restaurant),
            "hospital" => Ok(Self::Hospital),
            other => Err(ParseVerticalError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Vertical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    Assistant,
    User,
    Tool,
}

/// Turn payloads are either plain text or a structured tool payload.
/// Only textual content participates in pattern extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TurnContent {
    Text(String),
    Structured(serde_json::Value),
}

impl TurnContent {
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Structured(_) => None,
        }
    }
}

/// One exchange in a recorded call. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    #[serde(default)]
    pub content: Option<TurnContent>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConversationTurn {
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: Some(TurnContent::Text(content.into())),
            timestamp: None,
        }
    }
}

/// A finished call transcript. Never mutated after persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default = "Conversation::new_id")]
    pub id: String,
    pub vertical: Vertical,
    #[serde(default)]
    pub agent_type: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: String,
    pub turns: Vec<ConversationTurn>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Generate a conversation id, prefixed like all Ayra identifiers.
    #[must_use]
    pub fn new_id() -> String {
        format!("conv{}", Uuid::now_v7().simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_kind_order_is_fixed() {
        assert_eq!(
            Vertical::Restaurant.kinds(),
            &[ActivityKind::Reservation, ActivityKind::Order]
        );
        assert_eq!(
            Vertical::Hospital.kinds(),
            &[ActivityKind::Appointment, ActivityKind::Reminder]
        );
    }

    #[test]
    fn vertical_round_trips_through_str() {
        for v in [Vertical::Restaurant, Vertical::Hospital] {
            assert_eq!(v.as_str().parse::<Vertical>().ok(), Some(v));
        }
        assert!("clinic".parse::<Vertical>().is_err());
    }

    #[test]
    fn structured_turn_content_has_no_text() {
        let turn = ConversationTurn {
            role: TurnRole::Tool,
            content: Some(TurnContent::Structured(serde_json::json!({"ok": true}))),
            timestamp: None,
        };
        assert!(turn.content.as_ref().and_then(TurnContent::text).is_none());
    }

    #[test]
    fn turn_content_deserializes_untagged() {
        let turn: ConversationTurn =
            serde_json::from_str(r#"{"role":"user","content":"hello"}"#).unwrap_or_else(|e| {
                panic!("turn should deserialize: {e}");
            });
        assert_eq!(
            turn.content.as_ref().and_then(TurnContent::text),
            Some("hello")
        );
    }
}
