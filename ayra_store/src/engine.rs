//! Database-backed storage engine.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{info, warn};

use ayra_core::{
    ActivityStore, Appointment, Conversation, Order, Reminder, Reservation,
    TERMINAL_ORDER_STATUSES,
};
use ayra_entities::{
    conversations, hospital_appointments, hospital_reminders, restaurant_orders,
    restaurant_reservations,
};

use crate::convert;

/// `ActivityStore` over a sea-orm database connection.
pub struct StorageEngine {
    db: DatabaseConnection,
}

impl StorageEngine {
    /// Connect to the database behind the configured URL.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to database for StorageEngine");
        let db = Database::connect(database_url).await?;
        info!("StorageEngine initialized");
        Ok(Self { db })
    }
}

#[async_trait]
impl ActivityStore for StorageEngine {
    async fn insert_reservation(&self, row: Reservation) -> anyhow::Result<Reservation> {
        let model = restaurant_reservations::ActiveModel {
            id: Set(row.id),
            name: Set(row.name),
            phone: Set(row.phone),
            date: Set(row.date),
            time: Set(row.time),
            guests: Set(row.guests),
            special_requests: Set(row.special_requests),
            status: Set(row.status),
            created_at: Set(row.created_at),
        };
        let inserted = model.insert(&self.db).await?;

        info!("Created reservation: {}", inserted.id);
        Ok(convert::reservation_from_model(inserted))
    }

    async fn find_reservation(
        &self,
        name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reservation>> {
        let result = restaurant_reservations::Entity::find()
            .filter(restaurant_reservations::Column::Name.eq(name))
            .filter(restaurant_reservations::Column::Date.eq(date))
            .filter(restaurant_reservations::Column::Time.eq(time))
            .one(&self.db)
            .await?;

        Ok(result.map(convert::reservation_from_model))
    }

    async fn list_reservations_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Reservation>> {
        let results = restaurant_reservations::Entity::find()
            .filter(restaurant_reservations::Column::Date.gte(from.format("%Y-%m-%d").to_string()))
            .all(&self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(convert::reservation_from_model)
            .collect())
    }

    async fn insert_order(&self, row: Order) -> anyhow::Result<Order> {
        let model = restaurant_orders::ActiveModel {
            id: Set(row.id),
            name: Set(row.name),
            phone: Set(row.phone),
            address: Set(row.address),
            items: Set(convert::items_to_json(&row.items)),
            total: Set(row.total),
            fulfillment: Set(row.fulfillment.as_str().to_string()),
            status: Set(row.status),
            order_time: Set(row.order_time),
            delivery_time: Set(row.delivery_time),
            pickup_time: Set(row.pickup_time),
        };
        let inserted = model.insert(&self.db).await?;

        info!("Created order: {}", inserted.id);
        Ok(convert::order_from_model(inserted))
    }

    async fn find_order_since(
        &self,
        name: &str,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Option<Order>> {
        let result = restaurant_orders::Entity::find()
            .filter(restaurant_orders::Column::Name.eq(name))
            .filter(restaurant_orders::Column::OrderTime.gte(since))
            .one(&self.db)
            .await?;

        Ok(result.map(convert::order_from_model))
    }

    async fn list_open_orders(&self) -> anyhow::Result<Vec<Order>> {
        let results = restaurant_orders::Entity::find()
            .filter(restaurant_orders::Column::Status.is_not_in(TERMINAL_ORDER_STATUSES))
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(convert::order_from_model).collect())
    }

    async fn insert_appointment(&self, row: Appointment) -> anyhow::Result<Appointment> {
        let model = hospital_appointments::ActiveModel {
            id: Set(row.id),
            patient_name: Set(row.patient_name),
            patient_id: Set(row.patient_id),
            phone: Set(row.phone),
            doctor: Set(row.doctor),
            department: Set(row.department),
            date: Set(row.date),
            time: Set(row.time),
            reason: Set(row.reason),
            status: Set(row.status),
            created_at: Set(row.created_at),
        };
        let inserted = model.insert(&self.db).await?;

        info!("Created appointment: {}", inserted.id);
        Ok(convert::appointment_from_model(inserted))
    }

    async fn find_appointment(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Appointment>> {
        let result = hospital_appointments::Entity::find()
            .filter(hospital_appointments::Column::PatientName.eq(patient_name))
            .filter(hospital_appointments::Column::Date.eq(date))
            .filter(hospital_appointments::Column::Time.eq(time))
            .one(&self.db)
            .await?;

        Ok(result.map(convert::appointment_from_model))
    }

    async fn list_appointments_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Appointment>> {
        let results = hospital_appointments::Entity::find()
            .filter(hospital_appointments::Column::Date.gte(from.format("%Y-%m-%d").to_string()))
            .all(&self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(convert::appointment_from_model)
            .collect())
    }

    async fn insert_reminder(&self, row: Reminder) -> anyhow::Result<Reminder> {
        let model = hospital_reminders::ActiveModel {
            id: Set(row.id),
            patient_name: Set(row.patient_name),
            patient_id: Set(row.patient_id),
            phone: Set(row.phone),
            reminder_type: Set(row.reminder_type),
            date: Set(row.date),
            time: Set(row.time),
            doctor: Set(row.doctor),
            message: Set(row.message),
            status: Set(row.status),
            created_at: Set(row.created_at),
            scheduled_for: Set(row.scheduled_for),
            sent_at: Set(row.sent_at),
        };
        let inserted = model.insert(&self.db).await?;

        info!("Created reminder: {}", inserted.id);
        Ok(convert::reminder_from_model(inserted))
    }

    async fn find_reminder(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reminder>> {
        let result = hospital_reminders::Entity::find()
            .filter(hospital_reminders::Column::PatientName.eq(patient_name))
            .filter(hospital_reminders::Column::Date.eq(date))
            .filter(hospital_reminders::Column::Time.eq(time))
            .one(&self.db)
            .await?;

        Ok(result.map(convert::reminder_from_model))
    }

    async fn list_scheduled_reminders(&self) -> anyhow::Result<Vec<Reminder>> {
        let results = hospital_reminders::Entity::find()
            .filter(hospital_reminders::Column::Status.eq("scheduled"))
            .all(&self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(convert::reminder_from_model)
            .collect())
    }

    async fn insert_conversation(&self, row: Conversation) -> anyhow::Result<Conversation> {
        let model = conversations::ActiveModel {
            id: Set(row.id.clone()),
            vertical: Set(row.vertical.as_str().to_string()),
            timestamp: Set(row.created_at),
            agent_type: Set(row.agent_type.clone()),
            user_name: Set(row.user_name.clone()),
            summary: Set(row.summary.clone()),
            status: Set(row.status.clone()),
            data: Set(convert::conversation_turns_json(&row)?),
        };
        let inserted = model.insert(&self.db).await?;

        info!("Saved conversation: {}", inserted.id);
        Ok(row)
    }

    async fn find_conversation(&self, id: &str) -> anyhow::Result<Option<Conversation>> {
        let result = conversations::Entity::find_by_id(id).one(&self.db).await?;

        result.map(convert::conversation_from_model).transpose()
    }

    async fn list_conversations(&self) -> anyhow::Result<Vec<Conversation>> {
        let models = conversations::Entity::find().all(&self.db).await?;

        // Rows with undecodable payloads are skipped, not fatal.
        let mut rows = Vec::with_capacity(models.len());
        for model in models {
            let id = model.id.clone();
            match convert::conversation_from_model(model) {
                Ok(conversation) => rows.push(conversation),
                Err(err) => warn!("Skipping undecodable conversation {id}: {err}"),
            }
        }
        Ok(rows)
    }
}
