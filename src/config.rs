use crate::error::{Error, Result};
use std::time::Duration;

pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/drive";
pub const DEFAULT_PLAYLIST_ID: &str = "PL6ULlZ_0mjaiYXY_oadeDfBiVnrNIHiLp";
pub const DEFAULT_YT_DLP: &str = "yt-dlp";
pub const DEFAULT_UPLOAD_SPACING_SECS: u64 = 30;

/// Settings for one mirror run, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_credentials: String,
    pub audio_parent_id: String,
    pub reporting_parent_id: String,
    pub youtube_api_key: String,
    pub google_scopes: Vec<String>,
    pub playlist_id: String,
    pub yt_dlp_path: String,
    pub upload_spacing: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        let google_scopes = match lookup("GOOGLE_SCOPES") {
            Some(raw) => parse_scopes(&raw)?,
            None => vec![DEFAULT_SCOPE.to_string()],
        };

        let upload_spacing = match lookup("UPLOAD_MIN_SPACING_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!(
                    "UPLOAD_MIN_SPACING_SECS must be a whole number of seconds, got {:?}",
                    raw
                ))
            })?,
            None => DEFAULT_UPLOAD_SPACING_SECS,
        };

        Ok(Config {
            google_credentials: required("GOOGLE_CREDENTIALS")?,
            audio_parent_id: required("GOOGLE_AUDIO_PARENT_ID")?,
            reporting_parent_id: required("GOOGLE_REPORTING_PARENT_ID")?,
            youtube_api_key: required("YOUTUBE_API_KEY")?,
            google_scopes,
            playlist_id: lookup("YOUTUBE_PLAYLIST_ID")
                .unwrap_or_else(|| DEFAULT_PLAYLIST_ID.to_string()),
            yt_dlp_path: lookup("YT_DLP_PATH").unwrap_or_else(|| DEFAULT_YT_DLP.to_string()),
            upload_spacing: Duration::from_secs(upload_spacing),
        })
    }
}

/// Accepts either a JSON array of strings or a comma/whitespace separated list.
fn parse_scopes(raw: &str) -> Result<Vec<String>> {
    let raw = raw.trim();
    let scopes: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("GOOGLE_SCOPES is not a JSON list: {}", e)))?
    } else {
        raw.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|scope| !scope.is_empty())
            .map(str::to_string)
            .collect()
    };

    if scopes.is_empty() {
        return Err(Error::Config("GOOGLE_SCOPES must name at least one scope".into()));
    }
    Ok(scopes)
}
