use crate::db;
use crate::errors::ApiError;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authorization::requires_auth;
use crate::models;
use crate::views;
use actix_web::{post, web, web::Bytes, HttpRequest, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Add drink.", skip(req, body, pg_pool))]
#[post("")]
pub async fn item(
    req: HttpRequest,
    body: Result<Bytes, actix_web::Error>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let token = requires_auth(&req, "post:drinks").await?;

    let form: forms::DrinkForm = forms::parse_body(&body?)?;
    let recipe = forms::verify_recipe(&form.recipe)?;

    let drink = db::drink::insert(pg_pool.get_ref(), models::Drink::new(form.title, recipe)).await?;
    tracing::info!(drink_id = drink.id, subject = ?token.sub, "Drink created");

    Ok(JsonResponse::build()
        .set_item(views::drink::Long::from(drink))
        .ok())
}
