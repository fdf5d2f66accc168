use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The fields of a Google service-account JSON key that token exchange needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            Error::Config(format!("GOOGLE_CREDENTIALS is not a service account key: {}", e))
        })
    }

    pub fn claims(&self, scopes: &[String], now: DateTime<Utc>) -> Claims {
        let iat = now.timestamp();
        Claims {
            iss: self.client_email.clone(),
            scope: scopes.join(" "),
            aud: self.token_uri.clone(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Signed RS256 assertion for the jwt-bearer grant.
    pub fn assertion(&self, scopes: &[String], now: DateTime<Utc>) -> Result<String> {
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &self.claims(scopes, now),
            &key,
        )?;
        Ok(token)
    }
}
