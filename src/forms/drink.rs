use crate::models;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct DrinkForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 80)]
    #[validate(pattern = r"\S")]
    pub title: String,
    pub recipe: Value, // checked with verify_recipe
}

/// Partial update: absent (or null) fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct DrinkPatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 80)]
    #[validate(pattern = r"\S")]
    pub title: Option<String>,
    pub recipe: Option<Value>,
}

impl DrinkPatch {
    /// Applies the new title and the already verified recipe. Returns whether
    /// anything actually changed.
    pub fn update(
        self,
        drink: &mut models::Drink,
        recipe: Option<Vec<models::IngredientEntry>>,
    ) -> bool {
        let mut changed = false;

        if let Some(title) = self.title {
            if title != drink.title {
                drink.title = title;
                changed = true;
            }
        }

        if let Some(recipe) = recipe {
            if recipe != drink.recipe {
                drink.recipe = recipe;
                changed = true;
            }
        }

        changed
    }
}
