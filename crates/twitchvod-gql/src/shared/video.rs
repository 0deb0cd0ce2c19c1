use serde::{Deserialize, Serialize};

use super::QueryResponse;

pub type BatchedQueryResponse = Vec<QueryResponse<SeekbarPreviewVideo>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekbarPreviewVideo {
    #[serde(default)]
    pub video: Option<SeekbarVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekbarVideo {
    #[serde(rename = "seekPreviewsURL", default)]
    pub seek_previews_url: Option<String>,
}
