mod config;
mod console;
mod drive;
mod error;
mod logging;
mod playlist;
mod ports;
mod reader;
mod sync;
mod youtube;

use config::Config;
use dotenv::dotenv;
use drive::{DriveClient, ServiceAccountKey};
use sync::Mirror;
use youtube::{YoutubeClient, YtDlp};

#[tokio::main(flavor = "current_thread")]
async fn main() -> error::Result<()> {
    dotenv().ok();
    logging::init_tracing()?;

    let config = Config::from_env()?;
    let key = ServiceAccountKey::from_json(&config.google_credentials)?;

    let youtube = YoutubeClient::new(&config.youtube_api_key);
    let media = YtDlp::new(&config.yt_dlp_path);
    let drive = DriveClient::new(key, config.google_scopes.clone());

    let today = chrono::Local::now().date_naive();
    let report = Mirror::new(&config, &youtube, &media, &drive)
        .run(today)
        .await?;

    console::summary(&report);
    Ok(())
}
