pub mod client;
pub mod item;
pub mod media;

pub use client::YoutubeClient;
pub use item::PlaylistItemListResponse;
pub use media::YtDlp;
