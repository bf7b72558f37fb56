use std::borrow::Cow;

use chrono::NaiveDate;
use smartfridge_core::domain::{
    common::entities::app_errors::CoreError,
    fridge_item::{
        entities::{Category, FridgeItem, Unit},
        value_objects::{NewFridgeItem, parse_quantity},
    },
};
use validator::{Validate, ValidationError};

use crate::args::{ItemChanges, ItemFields};

/// The add/edit form as typed by the user, checked before any request is sent.
#[derive(Debug, Clone, Validate)]
pub struct ItemFormValidator {
    #[validate(custom(function = validate_name))]
    pub name: String,

    #[validate(custom(function = validate_quantity))]
    pub quantity: String,

    pub unit: String,

    pub expiry_date: Option<NaiveDate>,

    pub category: String,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_required")
            .with_message(Cow::Borrowed("Please enter item name")));
    }
    Ok(())
}

fn validate_quantity(quantity: &str) -> Result<(), ValidationError> {
    parse_quantity(quantity).map(|_| ()).map_err(|_| {
        ValidationError::new("quantity_invalid")
            .with_message(Cow::Borrowed("Please enter valid quantity"))
    })
}

impl From<ItemFields> for ItemFormValidator {
    fn from(fields: ItemFields) -> Self {
        Self {
            name: fields.name,
            quantity: fields.quantity,
            unit: fields.unit,
            expiry_date: fields.expiry_date,
            category: fields.category,
        }
    }
}

impl ItemFormValidator {
    /// The edit form starts from the stored item and applies the changes.
    pub fn from_existing(item: &FridgeItem, changes: ItemChanges) -> Self {
        let expiry_date = if changes.no_expiry {
            None
        } else {
            changes.expiry_date.or(item.expiry_date)
        };

        Self {
            name: changes.name.unwrap_or_else(|| item.name.clone()),
            quantity: changes
                .quantity
                .unwrap_or_else(|| item.quantity.to_string()),
            unit: changes.unit.unwrap_or_else(|| item.unit.to_string()),
            expiry_date,
            category: changes
                .category
                .unwrap_or_else(|| item.category.as_str().to_string()),
        }
    }

    pub fn into_new_item(self) -> Result<NewFridgeItem, CoreError> {
        if let Err(errors) = self.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("name") {
                return Err(CoreError::InvalidName);
            }
            return Err(CoreError::InvalidQuantity);
        }

        let quantity = parse_quantity(&self.quantity)?;

        NewFridgeItem::new(
            self.name,
            quantity,
            Unit::parse(&self.unit),
            self.expiry_date,
            Category::parse(&self.category),
        )
        .validate()
    }
}
