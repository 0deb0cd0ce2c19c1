//! Persisted queries the web player sends when it opens a VOD.
//!
//! Twitch only accepts these by hash, so if they rotate a hash the matching constant here has to
//! be updated by hand.

use crate::shared::{
    BatchedQueryRequest, PersistedQuery, QueryExtensions, QueryOperation, QueryVariables,
};

pub const PERSISTED_QUERY_VERSION: u32 = 1;

pub const SEEKBAR_PREVIEW_OPERATION: &str = "VideoPlayer_VODSeekbarPreviewVideo";
pub const SEEKBAR_PREVIEW_HASH: &str =
    "07e99e4d56c5a7c67117a154777b0baf85a5ffefa393b213f4bc712ccaf85dd6";

pub const COMSCORE_STREAMING_OPERATION: &str = "ComscoreStreamingQuery";
pub const COMSCORE_STREAMING_HASH: &str =
    "e1edae8122517d013405f237ffcc124515dc6ded82480a88daef69c83b53ac01";

pub const VOD_CHANNEL_LOGIN_OPERATION: &str = "VodChannelLoginQuery";
pub const VOD_CHANNEL_LOGIN_HASH: &str =
    "0c5feea4dad2565508828f16e53fe62614edf015159df4b3bca33423496ce78e";

fn persisted(operation_name: &str, sha256_hash: &str, variables: QueryVariables) -> QueryOperation {
    QueryOperation {
        operation_name: operation_name.to_string(),
        variables,
        extensions: QueryExtensions {
            persisted_query: PersistedQuery {
                version: PERSISTED_QUERY_VERSION,
                sha256_hash: sha256_hash.to_string(),
            },
        },
    }
}

/// Builds the batch for a single video. Only the first answer is read, but the player always
/// sends all three together and so do we.
pub fn seekbar_batch(video_id: &str) -> BatchedQueryRequest {
    vec![
        persisted(
            SEEKBAR_PREVIEW_OPERATION,
            SEEKBAR_PREVIEW_HASH,
            QueryVariables {
                video_id: Some(video_id.to_string()),
                vod_id: None,
            },
        ),
        persisted(
            COMSCORE_STREAMING_OPERATION,
            COMSCORE_STREAMING_HASH,
            QueryVariables {
                video_id: None,
                vod_id: Some(video_id.to_string()),
            },
        ),
        persisted(
            VOD_CHANNEL_LOGIN_OPERATION,
            VOD_CHANNEL_LOGIN_HASH,
            QueryVariables {
                video_id: Some(video_id.to_string()),
                vod_id: None,
            },
        ),
    ]
}
