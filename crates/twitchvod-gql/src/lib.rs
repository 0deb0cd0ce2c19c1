use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

pub use error::{Error, Result};
pub use shared::{
    BatchedQueryRequest, PersistedQuery, QueryExtensions, QueryOperation, QueryResponse,
    QueryVariables,
    video::{BatchedQueryResponse, SeekbarPreviewVideo, SeekbarVideo},
};

mod error;
pub mod queries;
mod shared;

/// The production GraphQL endpoint the web player talks to.
pub const TWITCH_GQL_URL: &str = "https://gql.twitch.tv/gql";

const STORYBOARDS_MARKER: &str = "/storyboards/";
const MANIFEST_SUFFIX: &str = "/chunked/index-dvr.m3u8";

static VIDEO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"twitch\.tv/videos/([0-9]+)").unwrap());

/// Turns Twitch VOD links into HLS playlist URLs.
///
/// Holds nothing but the HTTP client and where to send requests, so one resolver can be shared
/// between any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct VideoResolver {
    client: reqwest::Client,
    endpoint: String,
}
impl VideoResolver {
    /// Builds a resolver that sends `Client-Id: {client_id}` to `endpoint` with every request.
    pub fn new(client_id: &str, endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
                headers.insert("Client-Id", client_id.parse()?);

                headers
            })
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The GraphQL URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// See [`extract_video_id`].
    pub fn extract_video_id(&self, url: &str) -> Result<String> {
        extract_video_id(url)
    }

    /// Asks the GraphQL API where the VOD's seekbar previews live, and derives the playlist URL
    /// from that.
    ///
    /// The HTTP status is never looked at: an error page that doesn't parse is a
    /// [`Error::ResponseParse`], and a parseable one without a preview URL is
    /// [`Error::ManifestNotFound`].
    pub async fn resolve_manifest(&self, video_id: &str) -> Result<String> {
        let body = self
            .client
            .post(&self.endpoint)
            .json(&queries::seekbar_batch(video_id))
            .send()
            .await?
            .text()
            .await?;

        let res: BatchedQueryResponse = serde_json::from_str(&body)?;

        // Only the seekbar query is useful, the other two are along for the ride.
        let seek_previews_url = res
            .into_iter()
            .next()
            .and_then(|item| item.data)
            .and_then(|data| data.video)
            .and_then(|video| video.seek_previews_url)
            .filter(|url| !url.is_empty())
            .ok_or(Error::ManifestNotFound)?;

        Ok(manifest_url_from_seek_previews(&seek_previews_url))
    }
}

/// Pulls the numeric VOD ID out of anything containing `twitch.tv/videos/<digits>`.
///
/// A single leading `@` is dropped first, since that's how links come out of some chat clients.
pub fn extract_video_id(url: &str) -> Result<String> {
    let url = url.strip_prefix('@').unwrap_or(url);

    VIDEO_URL_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or(Error::InvalidUrlFormat)
}

/// Seekbar previews sit next to the VOD's chunks on the CDN, so cutting the storyboard path off
/// and appending the playlist name gives the manifest. URLs without a storyboard path are used
/// whole.
pub fn manifest_url_from_seek_previews(seek_previews_url: &str) -> String {
    let base = seek_previews_url
        .split_once(STORYBOARDS_MARKER)
        .map_or(seek_previews_url, |(base, _)| base);

    format!("{base}{MANIFEST_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_video_urls() {
        let cases = [
            ("https://www.twitch.tv/videos/2515010841", "2515010841"),
            ("@https://www.twitch.tv/videos/1234567890", "1234567890"),
            ("twitch.tv/videos/42", "42"),
            ("https://m.twitch.tv/videos/987?t=1h2m3s", "987"),
            ("https://www.twitch.tv/videos/555/extra/path", "555"),
            ("https://www.twitch.tv/videos/12\u{663}", "12"),
        ];

        for (url, expected) in cases {
            assert_eq!(extract_video_id(url).unwrap(), expected, "{url}");
        }
    }

    #[test]
    fn rejects_non_video_urls() {
        let cases = [
            "",
            "@",
            "https://www.twitch.tv/channel/123",
            "https://www.twitch.tv/videos/",
            "https://www.twitch.tv/videos/abc",
            "https://www.twitch.tv/videos/\u{661}\u{662}\u{663}",
            "https://www.twitch.tv/videos/\u{ff11}\u{ff12}",
            "https://www.youtube.com/watch?v=123",
        ];

        for url in cases {
            assert!(
                matches!(extract_video_id(url), Err(Error::InvalidUrlFormat)),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn only_one_at_sign_is_stripped() {
        // The regex isn't anchored, so extra prefixes are harmless.
        assert_eq!(
            extract_video_id("@@https://www.twitch.tv/videos/7").unwrap(),
            "7"
        );
    }

    #[test]
    fn manifest_replaces_storyboard_path() {
        assert_eq!(
            manifest_url_from_seek_previews("https://cdn.example.com/v/123/storyboards/123-0.jpg"),
            "https://cdn.example.com/v/123/chunked/index-dvr.m3u8"
        );
    }

    #[test]
    fn manifest_without_storyboard_path_keeps_whole_url() {
        assert_eq!(
            manifest_url_from_seek_previews("https://example.com/video/123"),
            "https://example.com/video/123/chunked/index-dvr.m3u8"
        );
    }

    #[test]
    fn manifest_cuts_at_first_storyboard_path() {
        assert_eq!(
            manifest_url_from_seek_previews("https://a.example/x/storyboards/y/storyboards/z.jpg"),
            "https://a.example/x/chunked/index-dvr.m3u8"
        );
    }

    #[test]
    fn resolver_keeps_endpoint() {
        let resolver = VideoResolver::new("test_client_id", TWITCH_GQL_URL).unwrap();

        assert_eq!(resolver.endpoint(), TWITCH_GQL_URL);
    }

    #[test]
    fn resolver_rejects_unencodable_client_id() {
        assert!(matches!(
            VideoResolver::new("bad\nid", TWITCH_GQL_URL),
            Err(Error::InvalidClientId(_))
        ));
    }

    #[test]
    fn response_survives_serde() {
        let res: BatchedQueryResponse = vec![QueryResponse {
            data: Some(SeekbarPreviewVideo {
                video: Some(SeekbarVideo {
                    seek_previews_url: Some("https://cdn.example.com/a/storyboards/b.jpg".into()),
                }),
            }),
        }];

        let text = serde_json::to_string(&res).unwrap();
        let decoded: BatchedQueryResponse = serde_json::from_str(&text).unwrap();

        assert_eq!(decoded, res);
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let res: BatchedQueryResponse =
            serde_json::from_str(r#"[{"data":{"video":null}},{},{"data":{"video":{}}}]"#).unwrap();

        assert_eq!(res[0].data, Some(SeekbarPreviewVideo { video: None }));
        assert_eq!(res[1].data, None);
        assert_eq!(
            res[2].data,
            Some(SeekbarPreviewVideo {
                video: Some(SeekbarVideo::default())
            })
        );
    }
}
