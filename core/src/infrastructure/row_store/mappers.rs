use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    domain::fridge_item::entities::{Category, FridgeItem, Unit},
    entity::fridge_items,
};

impl From<&fridge_items::Model> for FridgeItem {
    fn from(model: &fridge_items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            quantity: model.quantity,
            unit: Unit::parse(&model.unit),
            expiry_date: model.expiry_date,
            category: Category::parse(&model.category),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<fridge_items::Model> for FridgeItem {
    fn from(model: fridge_items::Model) -> Self {
        Self::from(&model)
    }
}

/// A row as returned by the PostgREST endpoint. Columns written by other
/// clients may be null, so the lenient fields fall back to defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct FridgeItemRow {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<FridgeItemRow> for FridgeItem {
    fn from(row: FridgeItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            unit: row.unit.map(Unit::from).unwrap_or_default(),
            expiry_date: row.expiry_date,
            category: row.category.map(Category::from).unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}
