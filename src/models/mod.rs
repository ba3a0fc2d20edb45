use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inbound trigger event. Only `path` is consulted; when absent it
/// defaults to `/`, the all-packages listing.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexRequest {
    #[serde(default = "default_path")]
    pub path: String,
}

impl IndexRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

fn default_path() -> String {
    "/".to_string()
}

/// Trigger-shaped response. HTML pages ride as UTF-8 text; downloads
/// ride base64-encoded with `isBase64Encoded` set so the boundary knows
/// to decode before putting bytes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexResponse {
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl IndexResponse {
    /// A listing page response.
    pub fn html(body: String) -> Self {
        Self {
            is_base64_encoded: false,
            headers: BTreeMap::from([("Content-Type".to_string(), "text/html".to_string())]),
            body,
        }
    }
}
