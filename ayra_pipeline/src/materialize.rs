//! Candidate to persisted-row materialization.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use ayra_core::{
    Activity, ActivityKind, ActivityStore, Appointment, AppointmentDraft, Candidate, ChangeHook,
    Order, OrderDraft, Reminder, ReminderDraft, Reservation, ReservationDraft,
};

use crate::dedup;

/// Result of one materialization attempt. A suppressed duplicate is normal
/// control flow, not an error.
#[derive(Debug, Clone)]
pub enum Materialized {
    Created(Activity),
    Duplicate,
}

/// Turns accepted candidates into persisted activities: dedup check,
/// generated id, kind defaults, creation stamp, write.
pub struct Materializer {
    store: Arc<dyn ActivityStore>,
    on_change: Option<ChangeHook>,
}

impl Materializer {
    #[must_use]
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            store,
            on_change: None,
        }
    }

    /// Attach a callback fired after every successful write (never after a
    /// skip). The UI layer uses it to re-poll.
    #[must_use]
    pub fn with_change_hook(mut self, hook: ChangeHook) -> Self {
        self.on_change = Some(hook);
        self
    }

    /// Materialize one candidate. Storage failures surface to the caller
    /// and are fatal for this candidate only.
    pub async fn materialize(
        &self,
        candidate: Candidate,
        conversation_id: &str,
    ) -> anyhow::Result<Materialized> {
        let kind = candidate.kind();

        if dedup::is_duplicate(self.store.as_ref(), &candidate).await? {
            debug!("Suppressed duplicate {kind} from conversation {conversation_id}");
            return Ok(Materialized::Duplicate);
        }

        let activity = match candidate {
            Candidate::Reservation(draft) => {
                Activity::Reservation(self.store.insert_reservation(reservation_row(draft)).await?)
            }
            Candidate::Order(draft) => {
                Activity::Order(self.store.insert_order(order_row(draft)).await?)
            }
            Candidate::Appointment(draft) => {
                Activity::Appointment(self.store.insert_appointment(appointment_row(draft)).await?)
            }
            Candidate::Reminder(draft) => {
                Activity::Reminder(self.store.insert_reminder(reminder_row(draft)).await?)
            }
        };

        info!(
            "Created {kind} {} from conversation {conversation_id}",
            activity.id()
        );

        if let Some(hook) = &self.on_change {
            hook();
        }

        Ok(Materialized::Created(activity))
    }
}

fn non_empty(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn reservation_row(draft: ReservationDraft) -> Reservation {
    Reservation {
        id: ActivityKind::Reservation.new_id(),
        name: non_empty(draft.name, "Customer"),
        phone: draft.phone,
        date: draft.date,
        time: draft.time,
        guests: draft.guests.map_or(1, |g| i32::try_from(g).unwrap_or(1)),
        special_requests: draft.special_requests,
        status: ActivityKind::Reservation.initial_status().to_string(),
        created_at: Utc::now(),
    }
}

fn order_row(draft: OrderDraft) -> Order {
    let total = draft.item_total();
    Order {
        id: ActivityKind::Order.new_id(),
        name: non_empty(draft.name, "Customer"),
        phone: draft.phone,
        address: draft.address,
        items: draft.items,
        total,
        fulfillment: draft.fulfillment,
        status: ActivityKind::Order.initial_status().to_string(),
        order_time: Utc::now(),
        delivery_time: None,
        pickup_time: None,
    }
}

fn appointment_row(draft: AppointmentDraft) -> Appointment {
    Appointment {
        id: ActivityKind::Appointment.new_id(),
        patient_name: non_empty(draft.patient_name, "Patient"),
        patient_id: draft.patient_id,
        phone: draft.phone,
        doctor: draft.doctor,
        department: draft.department,
        date: draft.date,
        time: draft.time,
        reason: draft.reason,
        status: ActivityKind::Appointment.initial_status().to_string(),
        created_at: Utc::now(),
    }
}

fn reminder_row(draft: ReminderDraft) -> Reminder {
    Reminder {
        id: ActivityKind::Reminder.new_id(),
        patient_name: non_empty(draft.patient_name, "Patient"),
        patient_id: draft.patient_id,
        phone: draft.phone,
        reminder_type: non_empty(draft.reminder_type, "appointment"),
        date: draft.date,
        time: draft.time,
        doctor: draft.doctor,
        message: draft.message,
        status: ActivityKind::Reminder.initial_status().to_string(),
        created_at: Utc::now(),
        scheduled_for: None,
        sent_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_defaults() {
        let row = reservation_row(ReservationDraft {
            name: String::new(),
            time: "19:00".to_string(),
            ..ReservationDraft::default()
        });
        assert_eq!(row.name, "Customer");
        assert_eq!(row.guests, 1);
        assert_eq!(row.status, "confirmed");
        assert!(row.id.starts_with('r'));
    }

    #[test]
    fn reminder_defaults() {
        let row = reminder_row(ReminderDraft {
            patient_name: "Meena".to_string(),
            ..ReminderDraft::default()
        });
        assert_eq!(row.reminder_type, "appointment");
        assert_eq!(row.status, "scheduled");
        assert!(row.id.starts_with("rem"));
    }
}
