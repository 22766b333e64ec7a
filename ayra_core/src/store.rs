//! The storage port: the single seam between the pipeline and whatever
//! backs persistence (networked database or in-process tables).
//!
//! Read-after-write consistency is only "eventually visible to the next
//! read"; the aggregator may legitimately miss an in-flight write.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

use crate::activity::{Appointment, Order, Reminder, Reservation};
use crate::Conversation;

/// Callback invoked after every successful materialization. No payload:
/// consumers re-poll on "something changed".
pub type ChangeHook = Arc<dyn Fn() + Send + Sync>;

/// Per-kind find/insert/list primitives plus conversation persistence.
///
/// `insert_*` returns the fully persisted row. The `find_*` lookups are the
/// dedup identity-key queries; `list_*` feed the aggregator. Date columns
/// are TEXT and compared lexically, so ISO dates order correctly and raw
/// unparsable captures simply fall through the filters.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn insert_reservation(&self, row: Reservation) -> anyhow::Result<Reservation>;

    /// Exact (name, date, time) lookup.
    async fn find_reservation(
        &self,
        name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reservation>>;

    /// Reservations with date on or after `from`.
    async fn list_reservations_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Reservation>>;

    async fn insert_order(&self, row: Order) -> anyhow::Result<Order>;

    /// Most recent order for `name` placed at or after `since`.
    async fn find_order_since(
        &self,
        name: &str,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Option<Order>>;

    /// Orders whose status is not terminal.
    async fn list_open_orders(&self) -> anyhow::Result<Vec<Order>>;

    async fn insert_appointment(&self, row: Appointment) -> anyhow::Result<Appointment>;

    /// Exact (patient name, date, time) lookup.
    async fn find_appointment(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Appointment>>;

    /// Appointments with date on or after `from`.
    async fn list_appointments_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Appointment>>;

    async fn insert_reminder(&self, row: Reminder) -> anyhow::Result<Reminder>;

    /// Exact (patient name, date, time) lookup; `time` may be empty.
    async fn find_reminder(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reminder>>;

    /// Reminders still in the scheduled status.
    async fn list_scheduled_reminders(&self) -> anyhow::Result<Vec<Reminder>>;

    async fn insert_conversation(&self, row: Conversation) -> anyhow::Result<Conversation>;

    async fn find_conversation(&self, id: &str) -> anyhow::Result<Option<Conversation>>;

    async fn list_conversations(&self) -> anyhow::Result<Vec<Conversation>>;
}
