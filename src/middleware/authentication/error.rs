use actix_web::http::StatusCode;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};

/// Why a request's bearer token was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    AuthHeaderMissing,
    #[error("Authorization header must be of the form \"Bearer <token>\".")]
    MalformedHeader,
    #[error("Unable to parse authentication token.")]
    MalformedToken,
    #[error("Unable to find the appropriate key.")]
    UnknownKey,
    #[error("Token signature is invalid.")]
    InvalidSignature,
    #[error("Token expired.")]
    TokenExpired,
    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,
    #[error("Signing keys are unavailable: {0}")]
    KeySetUnavailable(String),
    #[error("Permissions not included in JWT.")]
    PermissionsClaimMissing,
    #[error("Permission not found.")]
    Unauthorized,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PermissionsClaimMissing => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::KeySetUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthHeaderMissing => "authorization_header_missing",
            Self::MalformedHeader | Self::UnknownKey => "invalid_header",
            Self::MalformedToken => "invalid_token",
            Self::InvalidSignature => "invalid_signature",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims | Self::PermissionsClaimMissing => "invalid_claims",
            Self::KeySetUnavailable(_) => "jwks_unavailable",
            Self::Unauthorized => "unauthorized",
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidSubject
            | ErrorKind::ImmatureSignature
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::InvalidAlgorithm => Self::InvalidClaims,
            _ => Self::MalformedToken,
        }
    }
}
