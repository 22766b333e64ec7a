use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hospital_reminders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub phone: String,
    /// Reminder category, e.g. "appointment" or "medication".
    #[sea_orm(column_name = "type")]
    pub reminder_type: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    /// Explicit instant taking precedence over date+time for ordering.
    pub scheduled_for: Option<String>,
    pub sent_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
