use super::AuthError;
use actix_web::{http::header::HeaderName, HttpRequest};

/// Raw header value; a value that is not visible ASCII counts as malformed.
pub fn get_header<'a>(
    req: &'a HttpRequest,
    header_name: &'static str,
) -> Result<Option<&'a str>, AuthError> {
    match req.headers().get(HeaderName::from_static(header_name)) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| AuthError::MalformedHeader),
    }
}

/// `Bearer <token>`: exactly two space separated parts, the first literally `Bearer`.
pub fn extract_bearer_token(authorization: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = authorization.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
