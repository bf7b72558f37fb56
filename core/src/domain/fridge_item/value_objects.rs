use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    expiry::ExpiryStatus,
    fridge_item::entities::{Category, FridgeItem, Unit},
};

/// Payload for both the add and the edit action; `id` and `created_at` are
/// owned by the row store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFridgeItem {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub expiry_date: Option<NaiveDate>,
    pub category: Category,
}

impl NewFridgeItem {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: Unit,
        expiry_date: Option<NaiveDate>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            expiry_date,
            category,
        }
    }

    /// Trims the name and checks the field invariants.
    pub fn validate(mut self) -> Result<Self, CoreError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(CoreError::InvalidName);
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(CoreError::InvalidQuantity);
        }

        Ok(self)
    }
}

/// Parses a quantity typed into a form field.
pub fn parse_quantity(raw: &str) -> Result<f64, CoreError> {
    let quantity: f64 = raw.trim().parse().map_err(|_| CoreError::InvalidQuantity)?;

    if !quantity.is_finite() || quantity < 0.0 {
        return Err(CoreError::InvalidQuantity);
    }

    Ok(quantity)
}

/// An item annotated with its expiry state, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: FridgeItem,
    pub expiry: ExpiryStatus,
}

impl ItemView {
    pub fn new(item: FridgeItem, now: DateTime<Utc>) -> Self {
        let expiry = ExpiryStatus::classify(item.expiry_date, now);
        Self { item, expiry }
    }
}
