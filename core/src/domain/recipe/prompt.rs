use serde_json::json;

use crate::domain::fridge_item::entities::FridgeItem;

pub const RECIPE_COUNT: usize = 3;

/// "2 L Milk", "0.5 kg Chicken", ...
pub fn describe_item(item: &FridgeItem) -> String {
    format!("{} {} {}", item.quantity, item.unit, item.name)
}

pub fn build_recipe_prompt(items: &[FridgeItem]) -> String {
    let inventory = items
        .iter()
        .map(describe_item)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"I have these ingredients in my fridge: {inventory}.

Generate exactly {RECIPE_COUNT} simple recipes using most of these ingredients.

IMPORTANT: Return ONLY a valid JSON array with no additional text, markdown formatting, or code blocks.

Format:
[
  {{
    "name": "Recipe Name",
    "ingredients": ["200g ingredient 1", "2 tablespoons ingredient 2", "3 cups ingredient 3"],
    "steps": ["Step 1", "Step 2", "Step 3"]
  }}
]

Requirements:
- Each recipe must have a name (string)
- Each recipe must have ingredients (array of strings). Each ingredient MUST include the quantity/measurement (e.g., "2 eggs", "200g chicken", "1 cup milk")
- Each recipe must have steps (array of strings with clear instructions, in order)
- Keep recipes simple and easy for a home cook
- Only use quantities that fit within what is available in the fridge
- Return ONLY the JSON array, no other text"#
    )
}

/// Structured-output hint for the completion endpoint. The response is still
/// validated, since the hint is not always honoured.
pub fn recipe_response_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "ingredients": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "steps": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": ["name", "ingredients", "steps"]
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::fridge_item::entities::{Category, Unit};

    fn item(name: &str, quantity: f64, unit: Unit) -> FridgeItem {
        FridgeItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity,
            unit,
            expiry_date: None,
            category: Category::Other,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_prompt_lists_quantities_units_and_names() {
        let prompt = build_recipe_prompt(&[
            item("Milk", 2.0, Unit::Litre),
            item("Chicken", 0.5, Unit::Kilogram),
        ]);

        assert!(prompt.contains("2 L Milk, 0.5 kg Chicken"));
        assert!(prompt.contains("exactly 3 simple recipes"));
        assert!(prompt.contains("\"ingredients\": ["));
    }
}
