use crate::config::Config;
use crate::console;
use crate::error::Result;
use crate::playlist::{Playlist, PlaylistItem};
use crate::ports::{MediaFetch, NewObject, ObjectStorage, PlaylistListing};
use crate::reader::PlaylistReader;
use chrono::NaiveDate;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub const SNAPSHOT_MIME: &str = "application/json";
pub const AUDIO_MIME: &str = "audio/mpeg3";

pub fn snapshot_object_name(playlist_id: &str, date: NaiveDate) -> String {
    format!("youtube-{}-{}.json", playlist_id, date.format("%Y%m%d"))
}

/// Titles are used verbatim, path-unsafe characters included.
pub fn audio_object_name(title: &str) -> String {
    format!("{}.mp3", title)
}

/// Pause owed after an upload that took `elapsed`.
///
/// Uploads have always been spaced with `min(spacing - elapsed, 0)`, which
/// never comes out positive, so this is always zero.
pub fn throttle_pause(spacing: Duration, elapsed: Duration) -> Duration {
    spacing.saturating_sub(elapsed).min(Duration::ZERO)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackStatus {
    Uploaded { object_id: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackOutcome {
    pub video: String,
    pub title: String,
    pub status: TrackStatus,
}

impl TrackOutcome {
    pub fn is_uploaded(&self) -> bool {
        matches!(self.status, TrackStatus::Uploaded { .. })
    }
}

/// What a finished run attempted. A run succeeds once every track has been
/// attempted, whatever the individual outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub metadata_object: String,
    pub outcomes: Vec<TrackOutcome>,
}

impl RunReport {
    pub fn uploaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_uploaded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.uploaded()
    }
}

/// Mirrors one playlist into storage: snapshot, publish, then each track.
pub struct Mirror<'a> {
    listing: &'a dyn PlaylistListing,
    media: &'a dyn MediaFetch,
    storage: &'a dyn ObjectStorage,
    playlist_id: &'a str,
    audio_parent: &'a str,
    reporting_parent: &'a str,
    upload_spacing: Duration,
}

impl<'a> Mirror<'a> {
    pub fn new(
        config: &'a Config,
        listing: &'a dyn PlaylistListing,
        media: &'a dyn MediaFetch,
        storage: &'a dyn ObjectStorage,
    ) -> Self {
        Self {
            listing,
            media,
            storage,
            playlist_id: &config.playlist_id,
            audio_parent: &config.audio_parent_id,
            reporting_parent: &config.reporting_parent_id,
            upload_spacing: config.upload_spacing,
        }
    }

    pub async fn build_snapshot(&self) -> Result<Playlist> {
        console::step("📥", "downloading playlist metadata");
        let mut reader = PlaylistReader::new(self.listing, self.playlist_id);
        let playlist = Playlist::collect(&mut reader).await?;
        info!(
            playlist = self.playlist_id,
            pages = reader.pages_read(),
            items = playlist.items.len(),
            "built playlist snapshot"
        );
        Ok(playlist)
    }

    /// Uploads the snapshot document and returns its object name.
    pub async fn publish_snapshot(&self, playlist: &Playlist, today: NaiveDate) -> Result<String> {
        console::step("📥", "uploading playlist metadata to Google Drive");
        let name = snapshot_object_name(self.playlist_id, today);
        let object_id = self
            .storage
            .create(NewObject {
                name: name.clone(),
                parent: self.reporting_parent.to_string(),
                mime_type: SNAPSHOT_MIME.to_string(),
                body: playlist.to_json()?.into_bytes(),
            })
            .await?;
        info!(name = %name, id = %object_id, "published playlist snapshot");
        Ok(name)
    }

    /// Fetches one track's audio and uploads it, returning the new object id.
    pub async fn transfer_track(&self, item: &PlaylistItem) -> Result<String> {
        console::step("💿", format!("downloading {} from YouTube", item.title));
        let audio = self.media.fetch_audio(&item.video).await?;

        let started = Instant::now();
        let name = audio_object_name(&item.title);
        console::step("🙊", format!("uploading {} to Google Drive", name));
        let object_id = self
            .storage
            .create(NewObject {
                name,
                parent: self.audio_parent.to_string(),
                mime_type: AUDIO_MIME.to_string(),
                body: audio,
            })
            .await?;

        let pause = throttle_pause(self.upload_spacing, started.elapsed());
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
        Ok(object_id)
    }

    /// Attempts every item in order. A failed item is recorded and skipped.
    pub async fn transfer_tracks(&self, items: &[PlaylistItem]) -> Vec<TrackOutcome> {
        let mut outcomes = Vec::with_capacity(items.len());
        for item in items {
            let status = match self.transfer_track(item).await {
                Ok(object_id) => TrackStatus::Uploaded { object_id },
                Err(e) => {
                    warn!(title = %item.title, video = %item.video, error = %e, "skipping track");
                    console::warning(format!(
                        "error while processing track {}: {}",
                        item.title, e
                    ));
                    TrackStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            outcomes.push(TrackOutcome {
                video: item.video.clone(),
                title: item.title.clone(),
                status,
            });
        }
        outcomes
    }

    /// Listing and snapshot publishing failures abort the run before any
    /// track is touched.
    pub async fn run(&self, today: NaiveDate) -> Result<RunReport> {
        let playlist = self.build_snapshot().await?;
        let metadata_object = self.publish_snapshot(&playlist, today).await?;
        let outcomes = self.transfer_tracks(&playlist.items).await;

        Ok(RunReport {
            metadata_object,
            outcomes,
        })
    }
}
