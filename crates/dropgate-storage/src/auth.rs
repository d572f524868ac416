//! Service-account token acquisition
//!
//! Implements the OAuth 2.0 JWT-bearer grant used by Google service accounts: a short
//! RS256-signed assertion is exchanged at the token URI for a bearer access token,
//! which is cached until shortly before expiry.

use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::traits::{StorageError, StorageResult};

/// Scope limited to files this service account creates or opens.
const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;
/// Refresh this long before the token actually expires.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// Service-account credentials, as supplied through process configuration.
#[derive(Clone, Debug)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: String,
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + Duration::from_secs(EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

/// Exchanges service-account assertions for bearer tokens, caching the result.
pub struct TokenSource {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> StorageResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| StorageError::ConfigError(format!("Invalid private key: {}", e)))?;
        Ok(Self {
            key,
            encoding_key,
            http,
            cached: Mutex::new(None),
        })
    }

    /// Return a bearer token, reusing the cached one while it is still fresh.
    pub async fn token(&self) -> StorageResult<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh() {
                return Ok(token.token.clone());
            }
        }

        let response = self.fetch_token().await?;
        tracing::debug!(expires_in = response.expires_in, "Acquired storage access token");

        let token = response.access_token.clone();
        *cached = Some(CachedToken {
            token: response.access_token,
            expires_at: Instant::now() + Duration::from_secs(response.expires_in),
        });
        Ok(token)
    }

    async fn fetch_token(&self) -> StorageResult<TokenResponse> {
        let assertion = self.signed_assertion()?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Auth(format!(
                "Token endpoint returned {}: {}",
                status, body
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| StorageError::InvalidResponse(format!("Invalid token response: {}", e)))
    }

    fn signed_assertion(&self) -> StorageResult<String> {
        let iat = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            iss: &self.key.client_email,
            scope: DRIVE_FILE_SCOPE,
            aud: &self.key.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| StorageError::Auth(format!("Failed to sign assertion: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_private_key() {
        let key = ServiceAccountKey {
            client_email: "svc@project.iam.gserviceaccount.com".to_string(),
            private_key: "not a pem".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        };
        let err = TokenSource::new(key, reqwest::Client::new()).err().expect("key error");
        assert!(matches!(err, StorageError::ConfigError(_)));
    }

    #[test]
    fn test_cached_token_freshness_margin() {
        let fresh = CachedToken {
            token: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(EXPIRY_MARGIN_SECS + 10),
        };
        assert!(fresh.is_fresh());

        let stale = CachedToken {
            token: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(EXPIRY_MARGIN_SECS - 10),
        };
        assert!(!stale.is_fresh());
    }
}
