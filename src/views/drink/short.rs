use crate::models;
use serde::Serialize;
use std::convert::From;

/// Public representation: ingredient names are left out.
#[derive(Debug, Serialize)]
pub struct Short {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

#[derive(Debug, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: models::Parts,
}

impl From<models::IngredientEntry> for ShortIngredient {
    fn from(entry: models::IngredientEntry) -> Self {
        Self {
            color: entry.color,
            parts: entry.parts,
        }
    }
}

impl From<models::Drink> for Short {
    fn from(drink: models::Drink) -> Self {
        Self {
            id: drink.id,
            title: drink.title,
            recipe: drink.recipe.into_iter().map(Into::into).collect(),
        }
    }
}
