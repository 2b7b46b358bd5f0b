use crate::models::IngredientEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: i32, // assigned by storage, 0 until inserted
    pub title: String,
    pub recipe: Vec<IngredientEntry>,
}

impl Drink {
    pub fn new(title: String, recipe: Vec<IngredientEntry>) -> Self {
        Self {
            id: 0,
            title,
            recipe,
        }
    }

    /// Storage form of the recipe column.
    pub fn recipe_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.recipe)
    }

    pub fn parse_recipe(text: &str) -> Result<Vec<IngredientEntry>, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parts;

    fn mocha() -> Drink {
        Drink::new(
            "Mocha".to_string(),
            vec![
                IngredientEntry {
                    color: "brown".to_string(),
                    name: "espresso".to_string(),
                    parts: Parts::Number(1.into()),
                },
                IngredientEntry {
                    color: "white".to_string(),
                    name: "milk".to_string(),
                    parts: Parts::Text("2.5".to_string()),
                },
            ],
        )
    }

    #[test]
    fn recipe_survives_storage() {
        let drink = mocha();
        let text = drink.recipe_text().unwrap();
        assert_eq!(Drink::parse_recipe(&text).unwrap(), drink.recipe);
    }

    #[test]
    fn parts_keep_their_representation() {
        let text = mocha().recipe_text().unwrap();
        assert_eq!(
            text,
            r#"[{"color":"brown","name":"espresso","parts":1},{"color":"white","name":"milk","parts":"2.5"}]"#
        );
    }
}
