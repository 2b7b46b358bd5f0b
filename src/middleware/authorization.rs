use crate::errors::ApiError;
use crate::middleware::authentication::{get_header, AuthError, DecodedToken, TokenValidator};
use actix_web::{web, HttpRequest};

/// Permission gate: allows the operation only when the token grants `required`.
pub fn check_permissions(required: &str, token: &DecodedToken) -> Result<(), AuthError> {
    let permissions = token
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsClaimMissing)?;

    if !permissions.contains(required) {
        return Err(AuthError::Unauthorized);
    }

    Ok(())
}

/// Guard called first thing by every protected handler. Returns the verified
/// token so the handler can use its claims.
pub async fn requires_auth(req: &HttpRequest, permission: &str) -> Result<DecodedToken, ApiError> {
    let validator = req
        .app_data::<web::Data<TokenValidator>>()
        .ok_or_else(|| ApiError::Internal("token validator is not configured".to_string()))?;

    let authorization = get_header(req, "authorization")?;
    let token = validator.validate(authorization).await.map_err(|err| {
        tracing::warn!(code = err.code(), "Authentication failed: {}", err);
        err
    })?;

    check_permissions(permission, &token).map_err(|err| {
        tracing::warn!(
            code = err.code(),
            permission,
            subject = ?token.sub,
            "Authorization failed: {}",
            err
        );
        err
    })?;

    Ok(token)
}
