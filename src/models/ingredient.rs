use serde::{Deserialize, Serialize};

/// One component of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub color: String,
    pub name: String,
    pub parts: Parts,
}

/// Relative quantity, kept exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parts {
    Number(serde_json::Number),
    Text(String),
}
