use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    expiry::count_expiring_soon,
    fridge_item::{entities::FridgeItem, value_objects::ItemView},
};

/// Number of newest items previewed on the dashboard.
pub const RECENT_ITEMS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Greeting {
    /// `hour` is the local wall-clock hour, 0-23.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Greeting::Morning,
            12..=16 => Greeting::Afternoon,
            17..=20 => Greeting::Evening,
            _ => Greeting::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
            Greeting::Night => "Good night",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub expiring_soon: usize,
}

impl DashboardSummary {
    pub fn from_items(items: &[FridgeItem], now: DateTime<Utc>) -> Self {
        Self {
            total: items.len(),
            expiring_soon: count_expiring_soon(items.iter().map(|item| item.expiry_date), now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub greeting: Greeting,
    pub display_name: String,
    pub summary: DashboardSummary,
    pub recent: Vec<ItemView>,
}
