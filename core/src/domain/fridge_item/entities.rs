use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub expiry_date: Option<NaiveDate>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Dairy,
    Vegetables,
    Fruits,
    Meat,
    Grains,
    Beverages,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Dairy,
        Category::Vegetables,
        Category::Fruits,
        Category::Meat,
        Category::Grains,
        Category::Beverages,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Meat => "Meat",
            Category::Grains => "Grains",
            Category::Beverages => "Beverages",
            Category::Other => "Other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Dairy => "🥛",
            Category::Vegetables => "🥬",
            Category::Fruits => "🍎",
            Category::Meat => "🍖",
            Category::Grains => "🌾",
            Category::Beverages => "🥤",
            Category::Other => "📦",
        }
    }

    /// Total: anything outside the enumerated set falls back to `Other`.
    pub fn parse(value: &str) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    #[default]
    Pieces,
    Kilogram,
    Gram,
    Litre,
    Millilitre,
    Dozen,
    /// Free text written by clients that do not restrict the unit.
    Custom(String),
}

impl Unit {
    pub const KNOWN: [Unit; 6] = [
        Unit::Pieces,
        Unit::Kilogram,
        Unit::Gram,
        Unit::Litre,
        Unit::Millilitre,
        Unit::Dozen,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Pieces => "pcs",
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Litre => "L",
            Unit::Millilitre => "mL",
            Unit::Dozen => "dozen",
            Unit::Custom(label) => label,
        }
    }

    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Unit::KNOWN
            .into_iter()
            .find(|u| u.as_str() == value)
            .unwrap_or_else(|| Unit::Custom(value.to_string()))
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Unit::parse(&value)
    }
}

impl From<Unit> for String {
    fn from(value: Unit) -> Self {
        match value {
            Unit::Custom(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_defaults_to_other() {
        assert_eq!(Category::parse("Snacks"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
        assert_eq!(Category::parse("dairy"), Category::Dairy);
    }

    #[test]
    fn test_category_deserializes_leniently() {
        let category: Category = serde_json::from_str("\"Frozen\"").unwrap();
        assert_eq!(category, Category::Other);
        assert_eq!(serde_json::to_string(&Category::Meat).unwrap(), "\"Meat\"");
    }

    #[test]
    fn test_unit_keeps_free_text() {
        assert_eq!(Unit::parse("kg"), Unit::Kilogram);
        assert_eq!(Unit::parse("mL"), Unit::Millilitre);
        assert_eq!(Unit::parse("cups"), Unit::Custom("cups".to_string()));
        assert_eq!(serde_json::to_string(&Unit::Custom("cups".into())).unwrap(), "\"cups\"");
    }
}
