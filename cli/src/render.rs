use std::fmt::Write;

use serde::Serialize;
use smartfridge_core::domain::{
    dashboard::value_objects::DashboardOverview, fridge_item::value_objects::ItemView,
    recipe::entities::Recipe,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

impl Output {
    pub fn from_flag(json: bool) -> Self {
        if json { Output::Json } else { Output::Text }
    }

    pub fn is_json(self) -> bool {
        self == Output::Json
    }
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

fn expiry_label(view: &ItemView) -> &str {
    view.expiry.phrase.as_deref().unwrap_or("No expiry date")
}

pub fn item_line(view: &ItemView) -> String {
    let item = &view.item;
    format!(
        "{} {}  {} {}  [{}]  {}",
        item.category.emoji(),
        item.name,
        item.quantity,
        item.unit,
        expiry_label(view),
        item.id
    )
}

pub fn item_details(view: &ItemView) -> String {
    let item = &view.item;
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", item.category.emoji(), item.name);
    let _ = writeln!(out, "  Quantity: {} {}", item.quantity, item.unit);
    let _ = writeln!(out, "  Category: {}", item.category);
    match item.expiry_date {
        Some(date) => {
            let _ = writeln!(out, "  Expires:  {} ({})", date, expiry_label(view));
        }
        None => {
            let _ = writeln!(out, "  Expires:  -");
        }
    }
    let _ = writeln!(out, "  Added:    {}", item.created_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, "  Id:       {}", item.id);
    out
}

pub fn recipes(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for (index, recipe) in recipes.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, recipe.name);
        let _ = writeln!(out, "   Ingredients:");
        for ingredient in &recipe.ingredients {
            let _ = writeln!(out, "   - {}", ingredient);
        }
        let _ = writeln!(out, "   Steps:");
        for (step, text) in recipe.steps.iter().enumerate() {
            let _ = writeln!(out, "   {}. {}", step + 1, text);
        }
        out.push('\n');
    }
    out
}

pub fn dashboard(overview: &DashboardOverview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}, {}!", overview.greeting, overview.display_name);
    let _ = writeln!(
        out,
        "Total items: {}   Expiring soon: {}",
        overview.summary.total, overview.summary.expiring_soon
    );

    if overview.recent.is_empty() {
        let _ = writeln!(out, "\nYour fridge is empty.");
        return out;
    }

    let _ = writeln!(out, "\nRecent items:");
    for view in &overview.recent {
        let _ = writeln!(out, "  {}", item_line(view));
    }
    out
}
