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

//! Lexical pattern extraction: conversation turns in, at most one typed
//! candidate per kind out.
//!
//! Field rules are ordered and first-match-wins per field across turns; a
//! later turn can never overwrite a field an earlier turn filled. Failing
//! rules degrade to "field absent" and never error.

pub mod datetime;
pub mod fields;

mod appointment;
mod order;
mod reservation;

use ayra_core::{ActivityKind, Candidate, ConversationTurn};

/// Extract one candidate of `kind` from the turns, or `None` when the
/// kind's validity gate fails.
///
/// Reminders have no lexical rule by design; they are only ever created
/// through direct materialization requests, so this always returns `None`
/// for [`ActivityKind::Reminder`].
#[must_use]
pub fn extract(turns: &[ConversationTurn], kind: ActivityKind) -> Option<Candidate> {
    match kind {
        ActivityKind::Reservation => reservation::extract(turns).map(Candidate::Reservation),
        ActivityKind::Order => order::extract(turns).map(Candidate::Order),
        ActivityKind::Appointment => appointment::extract(turns).map(Candidate::Appointment),
        ActivityKind::Reminder => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayra_core::ConversationTurn;

    #[test]
    fn kinds_are_not_mutually_exclusive() {
        // One conversation can carry both a reservation and an order.
        let turns = vec![
            ConversationTurn::text("name is Dev, table for 2 at 8pm"),
            ConversationTurn::text("and I want to order a bottle of wine."),
        ];

        assert!(extract(&turns, ActivityKind::Reservation).is_some());
        assert!(extract(&turns, ActivityKind::Order).is_some());
    }

    #[test]
    fn reminders_never_extract() {
        let turns = vec![ConversationTurn::text(
            "name is Dev, remind me about my medication on June 3rd at 9am",
        )];
        assert_eq!(extract(&turns, ActivityKind::Reminder), None);
    }

    #[test]
    fn empty_turns_extract_nothing() {
        for kind in [
            ActivityKind::Reservation,
            ActivityKind::Order,
            ActivityKind::Appointment,
            ActivityKind::Reminder,
        ] {
            assert!(extract(&[], kind).is_none());
        }
    }
}
