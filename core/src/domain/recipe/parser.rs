use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::recipe::{entities::Recipe, errors::RecipeResponseError};

const FENCE: &str = "```";

/// Removes a surrounding markdown code fence, e.g. ```` ```json ... ``` ````.
///
/// Text that does not start with a fence is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    // Optional language tag right after the opening fence
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let rest = rest.trim();
    let rest = rest.strip_suffix(FENCE).unwrap_or(rest);

    rest.trim()
}

/// Turns raw completion text into the recipes it describes, in the order the
/// completion returned them.
///
/// Entries without a string `name`, an array `ingredients` and an array
/// `steps` are dropped. Non-string list elements are kept as their JSON text.
pub fn parse_recipe_response(raw: &str) -> Result<Vec<Recipe>, RecipeResponseError> {
    let body = strip_code_fence(raw);

    let parsed: Value = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse recipe response: {}", e);
        RecipeResponseError::Parse(e.to_string())
    })?;

    let Value::Array(entries) = parsed else {
        warn!("Recipe response is not an array");
        return Err(RecipeResponseError::Shape);
    };

    let total = entries.len();
    let recipes: Vec<Recipe> = entries.iter().filter_map(recipe_from_value).collect();

    if recipes.len() < total {
        debug!(
            dropped = total - recipes.len(),
            kept = recipes.len(),
            "dropped malformed recipe entries"
        );
    }

    if recipes.is_empty() {
        warn!("Recipe response contained no well-formed entry");
        return Err(RecipeResponseError::Empty);
    }

    Ok(recipes)
}

fn recipe_from_value(value: &Value) -> Option<Recipe> {
    let name = value.get("name")?.as_str()?;
    let ingredients = value.get("ingredients")?.as_array()?;
    let steps = value.get("steps")?.as_array()?;

    Some(Recipe {
        name: name.to_string(),
        ingredients: ingredients.iter().map(text_of).collect(),
        steps: steps.iter().map(text_of).collect(),
    })
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
