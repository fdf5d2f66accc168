use crate::error::{Error, Result};
use crate::playlist::PlaylistItem;
use crate::ports::{PageRequest, PlaylistListing, PlaylistPage};
use crate::youtube::PlaylistItemListResponse;
use reqwest::Client;

const PLAYLIST_ITEMS_URL: &str = "https://www.googleapis.com/youtube/v3/playlistItems";
const PARTS: &str = "snippet,contentDetails";

/// YouTube Data API v3 client authenticated with a plain API key.
pub struct YoutubeClient {
    http: Client,
    api_key: String,
}

impl YoutubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
        }
    }

    fn query(&self, request: &PageRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("part", PARTS.to_string()),
            ("maxResults", request.page_size.to_string()),
            ("playlistId", request.playlist_id.clone()),
            ("key", self.api_key.clone()),
        ];
        if let Some(token) = &request.page_token {
            query.push(("pageToken", token.clone()));
        }
        query
    }
}

#[async_trait::async_trait]
impl PlaylistListing for YoutubeClient {
    async fn list_page(&self, request: &PageRequest) -> Result<PlaylistPage> {
        let response = self
            .http
            .get(PLAYLIST_ITEMS_URL)
            .query(&self.query(request))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        let page = response.json::<PlaylistItemListResponse>().await?;
        Ok(PlaylistPage {
            items: page.items.into_iter().map(PlaylistItem::from).collect(),
            next_page_token: page.next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_query_has_no_token() {
        let client = YoutubeClient::new("k3y");
        let query = client.query(&PageRequest {
            playlist_id: "PL_x".into(),
            page_size: 25,
            page_token: None,
        });

        assert_eq!(
            query,
            vec![
                ("part", "snippet,contentDetails".to_string()),
                ("maxResults", "25".to_string()),
                ("playlistId", "PL_x".to_string()),
                ("key", "k3y".to_string()),
            ]
        );
    }

    #[test]
    fn later_pages_carry_the_token() {
        let client = YoutubeClient::new("k3y");
        let query = client.query(&PageRequest {
            playlist_id: "PL_x".into(),
            page_size: 25,
            page_token: Some("CBkQAA".into()),
        });

        assert_eq!(query.last(), Some(&("pageToken", "CBkQAA".to_string())));
    }
}
