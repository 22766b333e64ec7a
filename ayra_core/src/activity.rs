//! Activity shapes: transient extraction candidates and persisted rows.
//!
//! Optional text fields follow the original storage convention: an empty
//! string means "not captured". The extractor's first-match-wins logic and
//! the dedup identity keys both rely on that convention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Order statuses that exclude an order from the upcoming feed.
pub const TERMINAL_ORDER_STATUSES: [&str; 4] = ["delivered", "picked", "completed", "cancelled"];

/// The four activity kinds Ayra persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Reservation,
    Order,
    Appointment,
    Reminder,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown activity kind: {0}")]
pub struct ParseKindError(String);

impl ActivityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reservation => "reservation",
            Self::Order => "order",
            Self::Appointment => "appointment",
            Self::Reminder => "reminder",
        }
    }

    /// Identifier prefix, distinct per kind so ids are visually
    /// distinguishable and collision-free across kinds.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Reservation => "r",
            Self::Order => "o",
            Self::Appointment => "a",
            Self::Reminder => "rem",
        }
    }

    /// Status a freshly materialized row starts in.
    #[must_use]
    pub const fn initial_status(self) -> &'static str {
        match self {
            Self::Reservation => "confirmed",
            Self::Order => "pending",
            Self::Appointment | Self::Reminder => "scheduled",
        }
    }

    #[must_use]
    pub fn new_id(self) -> String {
        format!("{}{}", self.id_prefix(), Uuid::now_v7().simple())
    }
}

impl FromStr for ActivityKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reservation" => Ok(Self::Reservation),
            "order" => Ok(Self::Order),
            "appointment" => Ok(Self::Appointment),
            "reminder" => Ok(Self::Reminder),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    #[default]
    Pickup,
    Delivery,
}

impl Fulfillment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
        }
    }
}

impl FromStr for Fulfillment {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Self::Pickup),
            "delivery" => Ok(Self::Delivery),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Transient reservation candidate produced by extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: Option<u32>,
    pub special_requests: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub fulfillment: Fulfillment,
}

impl OrderDraft {
    /// Sum of quantity x price over the items.
    #[must_use]
    pub fn item_total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| f64::from(i.quantity) * i.price)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub patient_id: String,
    pub phone: String,
    pub doctor: String,
    pub department: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderDraft {
    pub patient_name: String,
    pub patient_id: String,
    pub phone: String,
    pub reminder_type: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub message: String,
}

/// A candidate is discarded unless its kind's validity gate passed; it has
/// no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Candidate {
    Reservation(ReservationDraft),
    Order(OrderDraft),
    Appointment(AppointmentDraft),
    Reminder(ReminderDraft),
}

impl Candidate {
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Reservation(_) => ActivityKind::Reservation,
            Self::Order(_) => ActivityKind::Order,
            Self::Appointment(_) => ActivityKind::Appointment,
            Self::Reminder(_) => ActivityKind::Reminder,
        }
    }
}

/// Persisted reservation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub special_requests: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Persisted order row. `delivery_time` and `pickup_time` are set by the
/// kitchen later, never at materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub fulfillment: Fulfillment,
    pub status: String,
    pub order_time: DateTime<Utc>,
    pub delivery_time: Option<String>,
    pub pickup_time: Option<String>,
}

/// Persisted appointment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub phone: String,
    pub doctor: String,
    pub department: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Persisted reminder row. `scheduled_for`, when present, overrides
/// date+time for feed ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub phone: String,
    pub reminder_type: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub scheduled_for: Option<String>,
    pub sent_at: Option<String>,
}

/// Any persisted activity, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Activity {
    Reservation(Reservation),
    Order(Order),
    Appointment(Appointment),
    Reminder(Reminder),
}

impl Activity {
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::Reservation(_) => ActivityKind::Reservation,
            Self::Order(_) => ActivityKind::Order,
            Self::Appointment(_) => ActivityKind::Appointment,
            Self::Reminder(_) => ActivityKind::Reminder,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Reservation(r) => &r.id,
            Self::Order(o) => &o.id,
            Self::Appointment(a) => &a.id,
            Self::Reminder(r) => &r.id,
        }
    }
}

/// One entry of the merged upcoming feed. The instant is derived for
/// sorting only and is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub activity: Activity,
    pub instant: DateTime<Utc>,
}
