use crate::error::Result;
use crate::ports::PlaylistListing;
use crate::reader::PlaylistReader;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub video: String,
    pub title: String,
}

impl PlaylistItem {
    pub fn new(video: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            video: video.into(),
            title: title.into(),
        }
    }
}

/// A snapshot of a playlist's items in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub items: Vec<PlaylistItem>,
    pub name: Option<String>,
}

impl Playlist {
    /// Drains `reader` into a snapshot. Duplicates and empty fields are kept.
    pub async fn collect<L>(reader: &mut PlaylistReader<'_, L>) -> Result<Self>
    where
        L: PlaylistListing + ?Sized,
    {
        let mut playlist = Playlist::default();
        while let Some(item) = reader.next_item().await? {
            playlist.items.push(item);
        }
        Ok(playlist)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
