use serde::{Deserialize, Serialize};

pub mod video;

/// Every operation in a batch goes out in one JSON array, and the answers come back in the same
/// order.
pub type BatchedQueryRequest = Vec<QueryOperation>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOperation {
    pub operation_name: String,
    pub variables: QueryVariables,
    pub extensions: QueryExtensions,
}

/// Different persisted queries name the same video differently, so only the one a query expects
/// is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariables {
    #[serde(rename = "videoID", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(rename = "vodID", default, skip_serializing_if = "Option::is_none")]
    pub vod_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExtensions {
    pub persisted_query: PersistedQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQuery {
    pub version: u32,
    pub sha256_hash: String,
}

/// A `null` or missing `data` field is treated the same as an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
}
