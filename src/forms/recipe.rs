use crate::models::{IngredientEntry, Parts};
use actix_web::http::StatusCode;
use serde_json::Value;

/// The recipe value a client sent did not have the expected shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid recipe: {recipe}")]
pub struct InvalidRecipe {
    pub recipe: Value,
}

impl InvalidRecipe {
    pub fn new(recipe: Value) -> Self {
        Self { recipe }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

// A recipe is a non-empty list of ingredient entries:
// [{"color": string, "name": string, "parts": number}, ...]
// A single entry may be sent on its own and is wrapped into a list.
pub fn verify_recipe(raw: &Value) -> Result<Vec<IngredientEntry>, InvalidRecipe> {
    let entries = match raw {
        Value::Array(items) if !items.is_empty() => {
            items.iter().map(ingredient_entry).collect::<Option<Vec<_>>>()
        }
        Value::Object(_) => ingredient_entry(raw).map(|entry| vec![entry]),
        _ => None,
    };

    entries.ok_or_else(|| {
        tracing::debug!("Rejected recipe {}", raw);
        InvalidRecipe::new(raw.clone())
    })
}

/// Shape check for a single entry: exactly `color`, `name` and `parts`.
pub fn is_valid_ingredient(item: &Value) -> bool {
    ingredient_entry(item).is_some()
}

fn ingredient_entry(item: &Value) -> Option<IngredientEntry> {
    let fields = item.as_object()?;
    if fields.len() != 3 {
        return None;
    }

    let color = fields.get("color")?.as_str()?;
    let name = fields.get("name")?.as_str()?;
    let parts = match fields.get("parts")? {
        Value::Number(number) => Parts::Number(number.clone()),
        Value::String(text) if is_numeric(text) => Parts::Text(text.clone()),
        _ => return None,
    };

    Some(IngredientEntry {
        color: color.to_string(),
        name: name.to_string(),
        parts,
    })
}

fn is_numeric(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .map(f64::is_finite)
        .unwrap_or(false)
}
