use crate::db::DbError;
use crate::forms::InvalidRecipe;
use crate::middleware::authentication::AuthError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;

/// Every failure a request can end with. Rendered as
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    InvalidRecipe(#[from] InvalidRecipe),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("a drink titled {0:?} already exists")]
    DuplicateTitle(String),
    /// Framework-level failure that has no richer meaning.
    #[error("{1}")]
    Http(StatusCode, String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) success: bool,
    pub(crate) error: u16,
    pub(crate) message: String,
}

impl ApiError {
    pub fn drink_not_found(id: i32) -> Self {
        Self::NotFound(format!("drink {} not found", id))
    }

    fn message(&self) -> String {
        match self {
            // details go to the log, not to the client
            Self::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateTitle(title) => Self::DuplicateTitle(title),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Extractor failures, e.g. a body over the payload limit, keep their status.
impl From<actix_web::Error> for ApiError {
    fn from(err: actix_web::Error) -> Self {
        Self::Http(err.as_response_error().status_code(), err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => err.status_code(),
            Self::InvalidRecipe(err) => err.status_code(),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateTitle(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Http(status, _) => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if let Self::Internal(detail) = self {
            tracing::error!(error = %detail, "Request failed");
        }

        HttpResponse::build(status).json(ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let body = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn auth_errors_keep_their_status() {
        let (status, body) = render(AuthError::AuthHeaderMissing.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!(401));

        let (status, body) = render(AuthError::Unauthorized.into()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], json!(403));
    }

    #[actix_web::test]
    async fn invalid_recipe_mentions_the_value() {
        let (status, body) = render(InvalidRecipe::new(json!("espresso")).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("espresso"));
    }

    #[actix_web::test]
    async fn duplicate_title_is_unprocessable() {
        let err: ApiError = DbError::DuplicateTitle("Mocha".to_string()).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], json!(422));
        assert!(body["message"].as_str().unwrap().contains("Mocha"));
    }

    #[actix_web::test]
    async fn internal_errors_hide_details() {
        let (status, body) = render(ApiError::Internal("connection refused".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!("Internal Server Error"));
    }

    #[actix_web::test]
    async fn oversized_payload_keeps_its_status() {
        let err: actix_web::Error = actix_web::error::PayloadError::Overflow.into();
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!(413));
    }

    #[actix_web::test]
    async fn not_found_drink() {
        let (status, body) = render(ApiError::drink_not_found(9999)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("drink 9999 not found"));
    }
}
