pub mod drink;
pub mod health_checks;

pub use health_checks::*;

use crate::errors::ApiError;
use actix_web::{http::StatusCode, HttpRequest};

/// Fallback for every path no route matches.
pub async fn not_found(req: HttpRequest) -> Result<&'static str, ApiError> {
    tracing::debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::Http(StatusCode::NOT_FOUND, "Not Found".to_string()))
}
