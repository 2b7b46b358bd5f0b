use super::AuthError;
use jsonwebtoken::jwk::{JwkSet, PublicKeyUse};
use jsonwebtoken::DecodingKey;
use reqwest::header::ACCEPT;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

/// At most one fetch attempt, successful or not, per this interval. Also the
/// shortest cache lifetime.
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Process-wide cache of the issuer's signing keys, keyed by `kid`.
///
/// Keys are kept for `ttl`. A key id that is not in the cache forces an early
/// refresh so that rotated keys are picked up without waiting for expiry.
/// Fetches run outside the key lock: requests with a cached key never wait on
/// the identity provider. When a refresh fails, keys already cached stay usable.
pub struct JwksCache {
    jwks_url: String,
    ttl: Duration,
    http_client: reqwest::Client,
    entries: RwLock<Option<CachedKeys>>,
    last_attempt: Mutex<Option<Instant>>,
}

struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

impl CachedKeys {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

impl JwksCache {
    pub fn new(http_client: reqwest::Client, jwks_url: String, ttl: Duration) -> Self {
        if ttl < MIN_REFRESH_INTERVAL {
            tracing::warn!(
                "Signing key cache TTL {:?} raised to {:?}",
                ttl,
                MIN_REFRESH_INTERVAL
            );
        }

        Self {
            jwks_url,
            ttl: ttl.max(MIN_REFRESH_INTERVAL),
            http_client,
            entries: RwLock::new(None),
            last_attempt: Mutex::new(None),
        }
    }

    pub async fn get(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        if let Some(key) = self.cached(kid, true).await {
            return Ok(key);
        }

        // one fetch at a time; waiters see the outcome of the one before them
        let mut last_attempt = self.last_attempt.lock().await;
        if matches!(*last_attempt, Some(at) if at.elapsed() < MIN_REFRESH_INTERVAL) {
            return self.cached(kid, false).await.ok_or(AuthError::UnknownKey);
        }
        *last_attempt = Some(Instant::now());

        match self.fetch().await {
            Ok(keys) => {
                let key = keys.get(kid).cloned();
                *self.entries.write().await = Some(CachedKeys {
                    keys,
                    fetched_at: Instant::now(),
                });
                key.ok_or(AuthError::UnknownKey)
            }
            Err(err) => match self.cached(kid, false).await {
                Some(key) => {
                    tracing::warn!(kid = %kid, "Key set refresh failed, using the cached key");
                    Ok(key)
                }
                None => Err(err),
            },
        }
    }

    async fn cached(&self, kid: &str, fresh_only: bool) -> Option<DecodingKey> {
        let entries = self.entries.read().await;
        let cached = entries.as_ref()?;
        if fresh_only && !cached.is_fresh(self.ttl) {
            return None;
        }
        cached.keys.get(kid).cloned()
    }

    #[tracing::instrument(name = "Fetch signing keys.", skip(self), fields(url = %self.jwks_url))]
    async fn fetch(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        let resp = self
            .http_client
            .get(&self.jwks_url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::error!(target: "auth", error = %err, "JWKS request failed");
                AuthError::KeySetUnavailable("no response from the identity provider".to_string())
            })?;

        if !resp.status().is_success() {
            tracing::error!(target: "auth", status = %resp.status(), "JWKS request rejected");
            return Err(AuthError::KeySetUnavailable(format!(
                "identity provider answered {}",
                resp.status()
            )));
        }

        let jwks = resp.json::<JwkSet>().await.map_err(|err| {
            tracing::error!(target: "auth", error = %err, "JWKS body is not a key set");
            AuthError::KeySetUnavailable("can't parse the key set".to_string())
        })?;

        Ok(decoding_keys(&jwks))
    }
}

/// Signing keys with a key id; anything unusable is skipped.
pub fn decoding_keys(jwks: &JwkSet) -> HashMap<String, DecodingKey> {
    let mut keys = HashMap::new();
    for jwk in &jwks.keys {
        let Some(kid) = jwk.common.key_id.as_ref() else {
            continue;
        };
        if matches!(jwk.common.public_key_use, Some(PublicKeyUse::Encryption)) {
            continue;
        }
        match DecodingKey::from_jwk(jwk) {
            Ok(key) => {
                keys.insert(kid.clone(), key);
            }
            Err(err) => tracing::warn!(kid = %kid, error = %err, "Skipping unusable signing key"),
        }
    }
    tracing::debug!("Loaded {} signing keys", keys.len());

    keys
}
