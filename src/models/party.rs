//! Party model matching the mobile client's Party interface.

use serde::{Deserialize, Serialize};

/// A party led by a single user.
///
/// One party per leader; `members` is a set of user ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub owner_id: String,
    pub members: Vec<String>,
    pub updated_at: String,
}

/// Result of a membership toggle, reported after the update commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipState {
    /// Whether the candidate is a member after the toggle.
    pub member: bool,
    pub members: Vec<String>,
}
