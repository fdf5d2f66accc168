use crate::error::{Error, Result};
use crate::ports::MediaFetch;
use tokio::process::Command;
use tracing::debug;

/// Fetches audio by piping `yt-dlp`'s best audio-only format to stdout.
pub struct YtDlp {
    binary: String,
}

impl YtDlp {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn args(video_id: &str) -> Vec<String> {
        vec![
            "--quiet".into(),
            "--no-warnings".into(),
            "--no-playlist".into(),
            "-f".into(),
            "bestaudio".into(),
            "-o".into(),
            "-".into(),
            watch_url(video_id),
        ]
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://youtube.com/watch?v={}", video_id)
}

#[async_trait::async_trait]
impl MediaFetch for YtDlp {
    async fn fetch_audio(&self, video_id: &str) -> Result<Vec<u8>> {
        if video_id.is_empty() {
            return Err(Error::Fetch("playlist item has no video id".into()));
        }

        let output = Command::new(&self.binary)
            .args(Self::args(video_id))
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Fetch(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(Error::Fetch(format!(
                "no audio stream available for {}",
                video_id
            )));
        }

        debug!(video = video_id, bytes = output.stdout.len(), "fetched audio");
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_best_audio_to_stdout() {
        let args = YtDlp::args("dQw4w9WgXcQ");
        let joined = args.join(" ");

        assert!(joined.contains("-f bestaudio"));
        assert!(joined.contains("-o -"));
        assert_eq!(
            args.last().map(String::as_str),
            Some("https://youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[tokio::test]
    async fn blank_video_id_fails_without_spawning() {
        let fetcher = YtDlp::new("/nonexistent/yt-dlp");
        let err = fetcher.fetch_audio("").await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }
}
