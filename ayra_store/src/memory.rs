//! In-process storage for offline runs and tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use ayra_core::{
    ActivityStore, Appointment, Conversation, Order, Reminder, Reservation,
    TERMINAL_ORDER_STATUSES,
};

#[derive(Default)]
struct Tables {
    reservations: Vec<Reservation>,
    orders: Vec<Order>,
    appointments: Vec<Appointment>,
    reminders: Vec<Reminder>,
    conversations: Vec<Conversation>,
}

/// `ActivityStore` over in-process tables.
///
/// Date filtering is lexical on the TEXT values, same as the database
/// backing: ISO dates order correctly, and raw unparsable captures fall
/// through exactly as they would in SQL.
#[derive(Default)]
pub struct MemStore {
    tables: RwLock<Tables>,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityStore for MemStore {
    async fn insert_reservation(&self, row: Reservation) -> anyhow::Result<Reservation> {
        self.tables.write().await.reservations.push(row.clone());
        Ok(row)
    }

    async fn find_reservation(
        &self,
        name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reservation>> {
        Ok(self
            .tables
            .read()
            .await
            .reservations
            .iter()
            .find(|r| r.name == name && r.date == date && r.time == time)
            .cloned())
    }

    async fn list_reservations_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Reservation>> {
        let cutoff = from.format("%Y-%m-%d").to_string();
        Ok(self
            .tables
            .read()
            .await
            .reservations
            .iter()
            .filter(|r| r.date.as_str() >= cutoff.as_str())
            .cloned()
            .collect())
    }

    async fn insert_order(&self, row: Order) -> anyhow::Result<Order> {
        self.tables.write().await.orders.push(row.clone());
        Ok(row)
    }

    async fn find_order_since(
        &self,
        name: &str,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Option<Order>> {
        Ok(self
            .tables
            .read()
            .await
            .orders
            .iter()
            .find(|o| o.name == name && o.order_time >= since)
            .cloned())
    }

    async fn list_open_orders(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self
            .tables
            .read()
            .await
            .orders
            .iter()
            .filter(|o| !TERMINAL_ORDER_STATUSES.contains(&o.status.as_str()))
            .cloned()
            .collect())
    }

    async fn insert_appointment(&self, row: Appointment) -> anyhow::Result<Appointment> {
        self.tables.write().await.appointments.push(row.clone());
        Ok(row)
    }

    async fn find_appointment(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Appointment>> {
        Ok(self
            .tables
            .read()
            .await
            .appointments
            .iter()
            .find(|a| a.patient_name == patient_name && a.date == date && a.time == time)
            .cloned())
    }

    async fn list_appointments_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Appointment>> {
        let cutoff = from.format("%Y-%m-%d").to_string();
        Ok(self
            .tables
            .read()
            .await
            .appointments
            .iter()
            .filter(|a| a.date.as_str() >= cutoff.as_str())
            .cloned()
            .collect())
    }

    async fn insert_reminder(&self, row: Reminder) -> anyhow::Result<Reminder> {
        self.tables.write().await.reminders.push(row.clone());
        Ok(row)
    }

    async fn find_reminder(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reminder>> {
        Ok(self
            .tables
            .read()
            .await
            .reminders
            .iter()
            .find(|r| r.patient_name == patient_name && r.date == date && r.time == time)
            .cloned())
    }

    async fn list_scheduled_reminders(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(self
            .tables
            .read()
            .await
            .reminders
            .iter()
            .filter(|r| r.status == "scheduled")
            .cloned()
            .collect())
    }

    async fn insert_conversation(&self, row: Conversation) -> anyhow::Result<Conversation> {
        self.tables.write().await.conversations.push(row.clone());
        Ok(row)
    }

    async fn find_conversation(&self, id: &str) -> anyhow::Result<Option<Conversation>> {
        Ok(self
            .tables
            .read()
            .await
            .conversations
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_conversations(&self) -> anyhow::Result<Vec<Conversation>> {
        Ok(self.tables.read().await.conversations.clone())
    }
}
