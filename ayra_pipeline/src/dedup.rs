//! Duplicate suppression for automatic materialization.
//!
//! Identity keys per kind:
//! - reservation: (name, date, time), exact
//! - order: (name) within the trailing 24 hours — intentionally coarse,
//!   kept as-is from the original behavior
//! - appointment: (patient name, date, time), exact
//! - reminder: (patient name, date, time-or-empty), exact
//!
//! Candidates missing key fields skip the lookup entirely and fall through
//! to creation; that can produce noisy empty-keyed rows and is documented
//! known behavior. Storage errors propagate so the caller skips creation
//! for the cycle (fail-closed).

use chrono::{Duration, Utc};

use ayra_core::{ActivityStore, Candidate};

/// Trailing window for the order identity key.
pub const ORDER_DEDUP_WINDOW_HOURS: i64 = 24;

/// Whether a substantially-identical activity already exists.
pub async fn is_duplicate(
    store: &dyn ActivityStore,
    candidate: &Candidate,
) -> anyhow::Result<bool> {
    match candidate {
        Candidate::Reservation(draft) => {
            if draft.name.is_empty() || draft.date.is_empty() || draft.time.is_empty() {
                return Ok(false);
            }
            let existing = store
                .find_reservation(&draft.name, &draft.date, &draft.time)
                .await?;
            Ok(existing.is_some())
        }
        Candidate::Order(draft) => {
            if draft.name.is_empty() || draft.items.is_empty() {
                return Ok(false);
            }
            let since = Utc::now() - Duration::hours(ORDER_DEDUP_WINDOW_HOURS);
            let existing = store.find_order_since(&draft.name, since).await?;
            Ok(existing.is_some())
        }
        Candidate::Appointment(draft) => {
            if draft.patient_name.is_empty() || draft.date.is_empty() || draft.time.is_empty() {
                return Ok(false);
            }
            let existing = store
                .find_appointment(&draft.patient_name, &draft.date, &draft.time)
                .await?;
            Ok(existing.is_some())
        }
        Candidate::Reminder(draft) => {
            if draft.patient_name.is_empty() || draft.date.is_empty() {
                return Ok(false);
            }
            let existing = store
                .find_reminder(&draft.patient_name, &draft.date, &draft.time)
                .await?;
            Ok(existing.is_some())
        }
    }
}
