use super::{extract_bearer_token, AuthError, DecodedToken, JwksCache};
use crate::configuration::AuthSettings;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use std::time::Duration;

/// Verifies bearer tokens issued by the configured identity provider.
pub struct TokenValidator {
    keys: JwksCache,
    issuer: String,
    audience: String,
    algorithms: Vec<Algorithm>,
}

impl TokenValidator {
    pub fn new(settings: &AuthSettings, http_client: reqwest::Client) -> Self {
        Self {
            keys: JwksCache::new(
                http_client,
                settings.jwks_url(),
                Duration::from_secs(settings.jwks_cache_ttl_secs),
            ),
            issuer: settings.issuer(),
            audience: settings.audience.clone(),
            algorithms: settings.algorithms.clone(),
        }
    }

    /// Validates the raw `Authorization` header value of a request.
    pub async fn validate(&self, authorization: Option<&str>) -> Result<DecodedToken, AuthError> {
        let authorization = authorization.ok_or(AuthError::AuthHeaderMissing)?;
        let token = extract_bearer_token(authorization)?;
        self.verify(token).await
    }

    /// Verifies signature, expiry, audience and issuer of a compact JWT.
    pub async fn verify(&self, token: &str) -> Result<DecodedToken, AuthError> {
        let header = decode_header(token).map_err(|err| {
            tracing::debug!("JWT header parsing failed: {}", err);
            AuthError::MalformedToken
        })?;
        let kid = header.kid.ok_or(AuthError::MalformedToken)?;
        let key = self.keys.get(&kid).await?;

        let mut validation = Validation::new(header.alg);
        validation.algorithms = self.algorithms.clone();
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<DecodedToken>(token, &key, &validation)?;
        Ok(data.claims)
    }
}
