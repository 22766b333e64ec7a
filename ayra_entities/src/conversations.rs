use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// "restaurant" or "hospital".
    #[sea_orm(column_name = "type")]
    pub vertical: String,
    pub timestamp: DateTimeUtc,
    pub agent_type: String,
    pub user_name: String,
    pub summary: String,
    pub status: String,
    /// JSON-encoded turn sequence.
    pub data: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
