use crate::error::Result;
use crate::playlist::PlaylistItem;

/// One page request against a playlist listing provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub playlist_id: String,
    pub page_size: u32,
    pub page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

/// A named blob to be persisted under a storage folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewObject {
    pub name: String,
    pub parent: String,
    pub mime_type: String,
    pub body: Vec<u8>,
}

/// Paginated listing of a playlist's items.
///
/// Implemented by `youtube::YoutubeClient` in production.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PlaylistListing: Send + Sync {
    async fn list_page(&self, request: &PageRequest) -> Result<PlaylistPage>;
}

/// Fetches the best available audio-only stream for a video, fully buffered.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MediaFetch: Send + Sync {
    async fn fetch_audio(&self, video_id: &str) -> Result<Vec<u8>>;
}

/// Append-only object storage. `create` returns the new object's id once
/// the provider has persisted it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn create(&self, object: NewObject) -> Result<String>;
}
