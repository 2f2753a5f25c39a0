use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{
    auth::claims::ServiceAccountClaims,
    errors::{AppError, AppResult},
};

pub const SHEETS_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

// Refresh this long before the token actually expires.
const EXPIRY_MARGIN_SECONDS: i64 = 60;

/// The fields of a Google service-account key file that token exchange needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    #[serde(deserialize_with = "secret_string")]
    pub private_key: SecretString,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

fn secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::Configuration(format!("Invalid service account key: {}", e)))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read service account key {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&raw)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

struct CachedToken {
    token: SecretString,
    expires_at: DateTime<Utc>,
}

fn unexpired(cached: &Option<CachedToken>) -> Option<SecretString> {
    cached
        .as_ref()
        .filter(|c| c.expires_at > Utc::now())
        .map(|c| c.token.clone())
}

/// Mints and caches OAuth access tokens for a service account.
pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    scopes: Vec<&'static str>,
    client: reqwest::Client,
    cached: RwLock<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    pub fn new(
        key: ServiceAccountKey,
        scopes: &[&'static str],
        client: reqwest::Client,
    ) -> AppResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.expose_secret().as_bytes())?;

        Ok(Self {
            key,
            encoding_key,
            scopes: scopes.to_vec(),
            client,
            cached: RwLock::new(None),
        })
    }

    pub fn create_assertion(&self) -> AppResult<String> {
        let claims =
            ServiceAccountClaims::new(&self.key.client_email, &self.scopes, &self.key.token_uri);

        Ok(encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    pub async fn access_token(&self) -> AppResult<SecretString> {
        if let Some(token) = unexpired(&*self.cached.read().await) {
            return Ok(token);
        }
        self.refresh().await
    }

    async fn refresh(&self) -> AppResult<SecretString> {
        let mut cached = self.cached.write().await;
        // Another caller may have refreshed while this one waited for the lock.
        if let Some(token) = unexpired(&cached) {
            return Ok(token);
        }

        let fresh = self.exchange_assertion().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn exchange_assertion(&self) -> AppResult<CachedToken> {
        let assertion = self.create_assertion()?;

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Persistence(format!(
                "Token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Persistence(format!("Invalid token response: {}", e)))?;

        log::info!("Obtained access token for {}", self.key.client_email);

        Ok(CachedToken {
            token: SecretString::from(token.access_token),
            expires_at: Utc::now() + Duration::seconds(token.expires_in - EXPIRY_MARGIN_SECONDS),
        })
    }
}
