use crate::error::Result;
use crate::playlist::PlaylistItem;
use crate::ports::{PageRequest, PlaylistListing};
use std::collections::VecDeque;
use tracing::debug;

pub const PAGE_SIZE: u32 = 25;

/// Pull-based walk over every item of a playlist, one page at a time.
///
/// A reader is single-use: once it returns `None` it stays exhausted.
/// Build a new one to read the playlist again from the first page.
pub struct PlaylistReader<'a, L: ?Sized> {
    listing: &'a L,
    playlist_id: String,
    buffered: VecDeque<PlaylistItem>,
    page_token: Option<String>,
    exhausted: bool,
    pages_read: usize,
}

impl<'a, L> PlaylistReader<'a, L>
where
    L: PlaylistListing + ?Sized,
{
    pub fn new(listing: &'a L, playlist_id: impl Into<String>) -> Self {
        Self {
            listing,
            playlist_id: playlist_id.into(),
            buffered: VecDeque::new(),
            page_token: None,
            exhausted: false,
            pages_read: 0,
        }
    }

    pub fn pages_read(&self) -> usize {
        self.pages_read
    }

    /// Next item in provider order. Listing errors are returned as-is.
    pub async fn next_item(&mut self) -> Result<Option<PlaylistItem>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted {
                return Ok(None);
            }

            let request = PageRequest {
                playlist_id: self.playlist_id.clone(),
                page_size: PAGE_SIZE,
                page_token: self.page_token.take(),
            };
            let page = self.listing.list_page(&request).await?;
            self.pages_read += 1;
            debug!(
                playlist = %self.playlist_id,
                page = self.pages_read,
                items = page.items.len(),
                "read playlist page"
            );

            self.buffered.extend(page.items);
            self.page_token = page.next_page_token.filter(|token| !token.is_empty());
            self.exhausted = self.page_token.is_none();
        }
    }
}
