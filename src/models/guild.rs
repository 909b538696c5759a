//! Guild model matching the mobile client's Guild interface.

use serde::{Deserialize, Serialize};

/// A guild with its membership roster and post feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub war_cry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque reference to the banner image in blob storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    pub owner_id: String,
    /// Unique member user ids, set semantics.
    pub members: Vec<String>,
    /// Ids of posts published to this guild's feed.
    pub posts: Vec<String>,
    pub created_at: String,
}

/// Request body for creating a new guild.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuildRequest {
    pub name: String,
    pub owner_id: String,
    #[serde(default)]
    pub war_cry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}

/// Request body for joining or leaving a guild.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildMembershipRequest {
    pub user_id: String,
}
