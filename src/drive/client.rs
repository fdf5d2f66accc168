use crate::drive::{ServiceAccountKey, Token};
use crate::error::{Error, Result};
use crate::ports::{NewObject, ObjectStorage};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const BOUNDARY: &str = "music_sync_7d1f0c9e4b2a48e6a1c3";

#[derive(Deserialize)]
struct CreatedFile {
    id: String,
}

/// Google Drive v3 client authenticated as a service account.
pub struct DriveClient {
    http: Client,
    key: ServiceAccountKey,
    scopes: Vec<String>,
    access_token: Mutex<Option<Token>>,
}

impl DriveClient {
    pub fn new(key: ServiceAccountKey, scopes: Vec<String>) -> Self {
        Self {
            http: Client::new(),
            key,
            scopes,
            access_token: Mutex::new(None),
        }
    }

    async fn request_access_token(&self) -> Result<String> {
        let mut cached = self.access_token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
        }

        let assertion = self.key.assertion(&self.scopes, Utc::now())?;
        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        let token = response.json::<Token>().await?;
        debug!(expires = %token.expiration, "refreshed drive access token");
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }
}

#[async_trait::async_trait]
impl ObjectStorage for DriveClient {
    async fn create(&self, object: NewObject) -> Result<String> {
        let access_token = self.request_access_token().await?;
        let body = multipart_related(&object)?;

        let response = self
            .http
            .post(UPLOAD_URL)
            .bearer_auth(access_token)
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/related; boundary={}", BOUNDARY),
            )
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        let created = response.json::<CreatedFile>().await?;
        debug!(name = %object.name, id = %created.id, "created drive file");
        Ok(created.id)
    }
}

/// Metadata part followed by the media part, as Drive's multipart upload expects.
fn multipart_related(object: &NewObject) -> Result<Vec<u8>> {
    let metadata = serde_json::to_string(&serde_json::json!({
        "name": object.name,
        "parents": [object.parent],
    }))?;

    let mut body = Vec::with_capacity(object.body.len() + metadata.len() + 256);
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{m}\r\n--{b}\r\nContent-Type: {t}\r\n\r\n",
            b = BOUNDARY,
            m = metadata,
            t = object.mime_type,
        )
        .as_bytes(),
    );
    body.extend_from_slice(&object.body);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    Ok(body)
}
