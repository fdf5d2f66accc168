use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid service account credentials: {0}")]
    Credentials(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("audio fetch failed: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Turns a non-success response into [`Error::Api`], keeping the body text.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        match response.text().await {
            Ok(body) => Error::Api { status, body },
            Err(e) => Error::Http(e),
        }
    }
}
