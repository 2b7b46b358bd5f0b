use crate::models;
use serde::Serialize;
use std::convert::From;

/// Full representation, for clients allowed to see the recipe.
#[derive(Debug, Serialize)]
pub struct Long {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<models::IngredientEntry>,
}

impl From<models::Drink> for Long {
    fn from(drink: models::Drink) -> Self {
        Self {
            id: drink.id,
            title: drink.title,
            recipe: drink.recipe,
        }
    }
}
