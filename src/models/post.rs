//! Post model matching the mobile client's Post interface.

use serde::{Deserialize, Serialize};

/// A post published to a guild's feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub guild_id: String,
    pub author_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub created_at: String,
}

/// Request body for creating a new post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub guild_id: String,
    pub author_id: String,
    pub content: String,
    #[serde(default)]
    pub media_url: Option<String>,
}
