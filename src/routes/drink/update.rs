use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authorization::requires_auth;
use crate::views;
use actix_web::{patch, web, web::Bytes, HttpRequest, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Update drink.", skip(req, body, pg_pool))]
#[patch("/{id}")]
pub async fn item(
    req: HttpRequest,
    path: web::Path<(i32,)>,
    body: Result<Bytes, actix_web::Error>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();
    requires_auth(&req, "patch:drinks").await?;

    let patch: forms::DrinkPatch = forms::parse_body(&body?)?;
    let recipe = patch
        .recipe
        .as_ref()
        .map(forms::verify_recipe)
        .transpose()?;

    let mut drink = db::drink::fetch(pg_pool.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::drink_not_found(id))?;

    if patch.update(&mut drink, recipe) {
        drink = db::drink::update(pg_pool.get_ref(), drink)
            .await?
            .ok_or_else(|| ApiError::drink_not_found(id))?;
    } else {
        tracing::debug!("Drink {} unchanged, skipping write", id);
    }

    Ok(JsonResponse::build()
        .set_item(views::drink::Long::from(drink))
        .ok())
}
