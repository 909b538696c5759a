//! User profile model matching the mobile client's Profile interface.

use serde::{Deserialize, Serialize};

/// A gaming platform a profile can carry a handle for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Psn,
    Xbox,
    Nintendo,
    Steam,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Psn => "psn",
            Platform::Xbox => "xbox",
            Platform::Nintendo => "nintendo",
            Platform::Steam => "steam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "psn" => Some(Platform::Psn),
            "xbox" => Some(Platform::Xbox),
            "nintendo" => Some(Platform::Nintendo),
            "steam" => Some(Platform::Steam),
            _ => None,
        }
    }
}

/// A user profile with identity and platform handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psn_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xbox_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nintendo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub updated_at: String,
}

impl Profile {
    /// Handle for the given platform, if the user registered one.
    pub fn gamertag(&self, platform: Platform) -> Option<&str> {
        let handle = match platform {
            Platform::Psn => &self.psn_id,
            Platform::Xbox => &self.xbox_id,
            Platform::Nintendo => &self.nintendo_id,
            Platform::Steam => &self.steam_id,
        };
        handle.as_deref()
    }
}

/// Request body for creating a new profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub psn_id: Option<String>,
    #[serde(default)]
    pub xbox_id: Option<String>,
    #[serde(default)]
    pub nintendo_id: Option<String>,
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request body for updating an existing profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub psn_id: Option<String>,
    #[serde(default)]
    pub xbox_id: Option<String>,
    #[serde(default)]
    pub nintendo_id: Option<String>,
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trip() {
        for platform in [
            Platform::Psn,
            Platform::Xbox,
            Platform::Nintendo,
            Platform::Steam,
        ] {
            assert_eq!(Platform::from_str(platform.as_str()), Some(platform));
        }
        assert_eq!(Platform::from_str("sega"), None);
    }
}
