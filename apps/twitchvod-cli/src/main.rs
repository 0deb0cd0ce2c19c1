use std::process::ExitCode;

use eyre::{Context as _, Result};
use tracing_subscriber::EnvFilter;
use twitchvod_gql::{TWITCH_GQL_URL, VideoResolver};

const USAGE: &str = "Usage: twitchvod <twitch_url>
Example: twitchvod https://www.twitch.tv/videos/2515010841";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the playlist URL is the only thing on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(url) = std::env::args().nth(1) else {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match resolve(&url).await {
        Ok(manifest) => {
            println!("{manifest}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn resolve(url: &str) -> Result<String> {
    // An empty client ID is still sent; Twitch decides whether it's good enough.
    let client_id = std::env::var("TWITCH_CLIENT_ID").unwrap_or_default();
    let endpoint = std::env::var("TWITCH_GQL_URL").unwrap_or_else(|_| TWITCH_GQL_URL.to_string());

    let resolver = VideoResolver::new(&client_id, endpoint)
        .wrap_err("Failed to set up Twitch client")?;

    let video_id = resolver
        .extract_video_id(url)
        .wrap_err("Error extracting video ID")?;
    tracing::debug!(name = "VideoId", video_id, endpoint = resolver.endpoint());

    resolver
        .resolve_manifest(&video_id)
        .await
        .wrap_err("Error calling Twitch API")
}
