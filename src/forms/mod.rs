pub mod drink;
pub mod recipe;

pub use drink::{DrinkForm, DrinkPatch};
pub use recipe::{is_valid_ingredient, verify_recipe, InvalidRecipe};

use crate::errors::ApiError;
use serde::de::DeserializeOwned;
use serde_valid::Validate;

/// Deserializes a JSON request body and runs its field validation.
pub fn parse_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let deserializer = &mut serde_json::Deserializer::from_slice(body);
    let form: T = serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let msg = format!("{}: {}", err.path(), err.inner());
        tracing::debug!("Invalid request body {}", msg);
        ApiError::BadRequest(msg)
    })?;

    form.validate()
        .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

    Ok(form)
}
