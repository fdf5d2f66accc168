use crate::playlist::PlaylistItem;
use serde::Deserialize;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub video_id: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct Snippet {
    pub title: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemResource {
    #[serde(default)]
    pub content_details: ContentDetails,
    #[serde(default)]
    pub snippet: Snippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItemResource>,
    pub next_page_token: Option<String>,
}

impl From<PlaylistItemResource> for PlaylistItem {
    fn from(resource: PlaylistItemResource) -> Self {
        PlaylistItem {
            video: resource.content_details.video_id.unwrap_or_default(),
            title: resource.snippet.title.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_playlist_items_page() {
        let body = r#"{
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "EAAaBlBUOkNESQ",
            "items": [
                {
                    "snippet": { "title": "Song A", "position": 0 },
                    "contentDetails": { "videoId": "v1" }
                },
                {
                    "snippet": { "title": "Private video" },
                    "contentDetails": {}
                },
                { "contentDetails": { "videoId": "v3" } }
            ]
        }"#;

        let page: PlaylistItemListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("EAAaBlBUOkNESQ"));

        let items: Vec<PlaylistItem> = page.items.into_iter().map(PlaylistItem::from).collect();
        assert_eq!(
            items,
            vec![
                PlaylistItem::new("v1", "Song A"),
                PlaylistItem::new("", "Private video"),
                PlaylistItem::new("v3", ""),
            ]
        );
    }

    #[test]
    fn last_page_has_no_token_and_may_omit_items() {
        let page: PlaylistItemListResponse = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
