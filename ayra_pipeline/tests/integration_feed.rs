//! Upcoming-feed aggregation tests over the in-process store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};

use ayra_core::{
    ActivityKind, ActivityStore, Appointment, Conversation, Fulfillment, Order, Reminder,
    Reservation,
};
use ayra_pipeline::list_upcoming;
use ayra_store::MemStore;

fn reservation_at(name: &str, when: DateTime<Utc>) -> Reservation {
    Reservation {
        id: ActivityKind::Reservation.new_id(),
        name: name.to_string(),
        phone: String::new(),
        date: when.format("%Y-%m-%d").to_string(),
        time: when.format("%H:%M").to_string(),
        guests: 2,
        special_requests: String::new(),
        status: "confirmed".to_string(),
        created_at: Utc::now(),
    }
}

fn order_row(name: &str, status: &str, delivery_time: Option<String>) -> Order {
    Order {
        id: ActivityKind::Order.new_id(),
        name: name.to_string(),
        phone: String::new(),
        address: String::new(),
        items: Vec::new(),
        total: 0.0,
        fulfillment: Fulfillment::Delivery,
        status: status.to_string(),
        order_time: Utc::now(),
        delivery_time,
        pickup_time: None,
    }
}

fn appointment_raw(name: &str, date: &str, time: &str) -> Appointment {
    Appointment {
        id: ActivityKind::Appointment.new_id(),
        patient_name: name.to_string(),
        patient_id: String::new(),
        phone: String::new(),
        doctor: String::new(),
        department: String::new(),
        date: date.to_string(),
        time: time.to_string(),
        reason: String::new(),
        status: "scheduled".to_string(),
        created_at: Utc::now(),
    }
}

fn appointment_at(name: &str, when: DateTime<Utc>) -> Appointment {
    appointment_raw(
        name,
        &when.format("%Y-%m-%d").to_string(),
        &when.format("%H:%M").to_string(),
    )
}

fn reminder_row(name: &str, date: &str, time: &str, scheduled_for: Option<String>) -> Reminder {
    Reminder {
        id: ActivityKind::Reminder.new_id(),
        patient_name: name.to_string(),
        patient_id: String::new(),
        phone: String::new(),
        reminder_type: "appointment".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        doctor: String::new(),
        message: String::new(),
        status: "scheduled".to_string(),
        created_at: Utc::now(),
        scheduled_for,
        sent_at: None,
    }
}

#[tokio::test]
async fn feed_merges_kinds_in_time_order() {
    let store = Arc::new(MemStore::new());
    let now = Utc::now();

    store
        .insert_reservation(reservation_at("Res", now + Duration::hours(2)))
        .await
        .unwrap();
    store
        .insert_order(order_row(
            "Ord",
            "pending",
            Some((now + Duration::hours(1)).to_rfc3339()),
        ))
        .await
        .unwrap();
    store
        .insert_appointment(appointment_at("App", now + Duration::hours(3)))
        .await
        .unwrap();

    let feed = list_upcoming(store.as_ref(), 10).await.unwrap();

    let kinds: Vec<_> = feed.iter().map(|e| e.activity.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ActivityKind::Order,
            ActivityKind::Reservation,
            ActivityKind::Appointment,
        ]
    );
}

#[tokio::test]
async fn unparsable_schedule_sorts_at_now() {
    let store = Arc::new(MemStore::new());

    // Raw capture that never normalized; it must still surface, ahead of
    // anything genuinely in the future.
    store
        .insert_appointment(appointment_raw("Raw", "June 15", ""))
        .await
        .unwrap();
    store
        .insert_reservation(reservation_at("Future", Utc::now() + Duration::days(30)))
        .await
        .unwrap();

    let feed = list_upcoming(store.as_ref(), 10).await.unwrap();

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].activity.kind(), ActivityKind::Appointment);
    assert!((feed[0].instant - Utc::now()).num_seconds().abs() < 5);
}

#[tokio::test]
async fn limit_truncates_after_sorting() {
    let store = Arc::new(MemStore::new());
    let now = Utc::now();

    // Inserted out of order on purpose.
    for hours in [5, 1, 4, 2, 3] {
        store
            .insert_reservation(reservation_at(
                &format!("guest-{hours}"),
                now + Duration::hours(hours),
            ))
            .await
            .unwrap();
    }

    let feed = list_upcoming(store.as_ref(), 3).await.unwrap();

    let names: Vec<_> = feed
        .iter()
        .map(|e| match &e.activity {
            ayra_core::Activity::Reservation(r) => r.name.as_str(),
            other => panic!("unexpected entry: {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["guest-1", "guest-2", "guest-3"]);
}

#[tokio::test]
async fn zero_limit_yields_empty_feed() {
    let store = Arc::new(MemStore::new());
    store
        .insert_reservation(reservation_at("Res", Utc::now() + Duration::hours(1)))
        .await
        .unwrap();

    let feed = list_upcoming(store.as_ref(), 0).await.unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn terminal_orders_stay_out_of_the_feed() {
    let store = Arc::new(MemStore::new());
    store
        .insert_order(order_row("Done", "delivered", None))
        .await
        .unwrap();
    store
        .insert_order(order_row("Open", "pending", None))
        .await
        .unwrap();

    let feed = list_upcoming(store.as_ref(), 10).await.unwrap();

    assert_eq!(feed.len(), 1);
    match &feed[0].activity {
        ayra_core::Activity::Order(o) => assert_eq!(o.name, "Open"),
        other => panic!("unexpected entry: {other:?}"),
    }
}

#[tokio::test]
async fn reminder_scheduled_for_takes_precedence() {
    let store = Arc::new(MemStore::new());
    let now = Utc::now();

    let soon = now + Duration::hours(1);
    store
        .insert_reminder(reminder_row(
            "Nudge",
            &(now + Duration::days(10)).format("%Y-%m-%d").to_string(),
            "09:00",
            Some(soon.to_rfc3339()),
        ))
        .await
        .unwrap();
    store
        .insert_reservation(reservation_at("Res", now + Duration::hours(2)))
        .await
        .unwrap();

    let feed = list_upcoming(store.as_ref(), 10).await.unwrap();

    assert_eq!(feed[0].activity.kind(), ActivityKind::Reminder);
    assert_eq!(feed[1].activity.kind(), ActivityKind::Reservation);
}

/// Store wrapper whose open-orders read always fails, for the
/// no-partial-feed test.
struct BrokenOrderReads {
    inner: MemStore,
}

#[async_trait]
impl ActivityStore for BrokenOrderReads {
    async fn insert_reservation(&self, row: Reservation) -> anyhow::Result<Reservation> {
        self.inner.insert_reservation(row).await
    }

    async fn find_reservation(
        &self,
        name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reservation>> {
        self.inner.find_reservation(name, date, time).await
    }

    async fn list_reservations_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Reservation>> {
        self.inner.list_reservations_from(from).await
    }

    async fn insert_order(&self, row: Order) -> anyhow::Result<Order> {
        self.inner.insert_order(row).await
    }

    async fn find_order_since(
        &self,
        name: &str,
        since: DateTime<Utc>,
    ) -> anyhow::Result<Option<Order>> {
        self.inner.find_order_since(name, since).await
    }

    async fn list_open_orders(&self) -> anyhow::Result<Vec<Order>> {
        anyhow::bail!("connection reset")
    }

    async fn insert_appointment(&self, row: Appointment) -> anyhow::Result<Appointment> {
        self.inner.insert_appointment(row).await
    }

    async fn find_appointment(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Appointment>> {
        self.inner.find_appointment(patient_name, date, time).await
    }

    async fn list_appointments_from(&self, from: NaiveDate) -> anyhow::Result<Vec<Appointment>> {
        self.inner.list_appointments_from(from).await
    }

    async fn insert_reminder(&self, row: Reminder) -> anyhow::Result<Reminder> {
        self.inner.insert_reminder(row).await
    }

    async fn find_reminder(
        &self,
        patient_name: &str,
        date: &str,
        time: &str,
    ) -> anyhow::Result<Option<Reminder>> {
        self.inner.find_reminder(patient_name, date, time).await
    }

    async fn list_scheduled_reminders(&self) -> anyhow::Result<Vec<Reminder>> {
        self.inner.list_scheduled_reminders().await
    }

    async fn insert_conversation(&self, row: Conversation) -> anyhow::Result<Conversation> {
        self.inner.insert_conversation(row).await
    }

    async fn find_conversation(&self, id: &str) -> anyhow::Result<Option<Conversation>> {
        self.inner.find_conversation(id).await
    }

    async fn list_conversations(&self) -> anyhow::Result<Vec<Conversation>> {
        self.inner.list_conversations().await
    }
}

#[tokio::test]
async fn one_failed_read_fails_the_whole_feed() {
    let store = BrokenOrderReads {
        inner: MemStore::new(),
    };
    let now = Utc::now();

    // Three kinds are perfectly readable; no partial feed comes back.
    store
        .inner
        .insert_reservation(reservation_at("Res", now + Duration::hours(1)))
        .await
        .unwrap();
    store
        .inner
        .insert_appointment(appointment_at("App", now + Duration::hours(2)))
        .await
        .unwrap();
    store
        .inner
        .insert_reminder(reminder_row("Nudge", "2030-01-01", "09:00", None))
        .await
        .unwrap();

    assert!(list_upcoming(&store, 10).await.is_err());
}

#[tokio::test]
async fn equal_instants_keep_read_order() {
    let store = Arc::new(MemStore::new());
    let when = Utc::now() + Duration::hours(6);

    // The order's explicit delivery instant lands on the reservation's
    // minute exactly; reservations are read first and stay first.
    let date = when.format("%Y-%m-%d").to_string();
    let time = when.format("%H:%M").to_string();
    store
        .insert_order(order_row(
            "Ord",
            "pending",
            Some(format!("{date}T{time}:00Z")),
        ))
        .await
        .unwrap();
    store
        .insert_reservation(reservation_at("Res", when))
        .await
        .unwrap();

    let feed = list_upcoming(store.as_ref(), 10).await.unwrap();

    assert_eq!(feed[0].instant, feed[1].instant);
    assert_eq!(feed[0].activity.kind(), ActivityKind::Reservation);
    assert_eq!(feed[1].activity.kind(), ActivityKind::Order);
}
