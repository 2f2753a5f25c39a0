use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime Google accepts for a service-account assertion.
pub const ASSERTION_LIFETIME_SECONDS: i64 = 3600;

/// Claims of the JWT bearer assertion exchanged for an OAuth access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountClaims {
    pub iss: String,   // service account email
    pub scope: String, // space-separated OAuth scopes
    pub aud: String,   // token endpoint
    pub exp: usize,
    pub iat: usize,
}

impl ServiceAccountClaims {
    pub fn new(client_email: &str, scopes: &[&str], token_uri: &str) -> Self {
        let now = Utc::now();
        let exp = now + Duration::seconds(ASSERTION_LIFETIME_SECONDS);

        Self {
            iss: client_email.to_string(),
            scope: scopes.join(" "),
            aud: token_uri.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
