use crate::db;
use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::middleware::authorization::requires_auth;
use actix_web::{delete, web, HttpRequest, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete drink.", skip(req, pg_pool))]
#[delete("/{id}")]
pub async fn item(
    req: HttpRequest,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();
    requires_auth(&req, "delete:drinks").await?;

    if !db::drink::delete(pg_pool.get_ref(), id).await? {
        return Err(ApiError::drink_not_found(id));
    }

    Ok(JsonResponse::<()>::build().set_deleted(id).ok())
}
