use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    /// JSON-encoded `Vec<OrderItem>`.
    pub items: String,
    pub total: f64,
    /// "pickup" or "delivery".
    #[sea_orm(column_name = "type")]
    pub fulfillment: String,
    pub status: String,
    pub order_time: DateTimeUtc,
    pub delivery_time: Option<String>,
    pub pickup_time: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
