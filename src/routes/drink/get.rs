use crate::db;
use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::middleware::authorization::requires_auth;
use crate::views;
use actix_web::{get, web, HttpRequest, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "List drinks.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    let drinks = db::drink::fetch_all(pg_pool.get_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::drink::Short>>();

    Ok(JsonResponse::build().set_list(drinks).ok())
}

#[tracing::instrument(name = "List drinks with recipes.", skip(req, pg_pool))]
#[get("")]
pub async fn detail_list(
    req: HttpRequest,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    requires_auth(&req, "get:drinks-detail").await?;

    let drinks = db::drink::fetch_all(pg_pool.get_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::drink::Long>>();

    Ok(JsonResponse::build().set_list(drinks).ok())
}
