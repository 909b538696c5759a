//! Profile API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateProfileRequest, Platform, Profile, UpdateProfileRequest};
use crate::AppState;

/// A profile's handle on one platform.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gamertag {
    pub platform: Platform,
    pub gamertag: String,
}

/// POST /api/profiles - Create a new profile.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> ApiResult<Profile> {
    if request.username.trim().is_empty() {
        return Err(AppError::Validation("Username is required".to_string()));
    }

    let profile = state.repo.create_profile(&request).await?;
    success(profile)
}

/// GET /api/profiles/:id - Get a single profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Profile> {
    let profile = state
        .repo
        .get_profile(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

    success(profile)
}

/// GET /api/profiles/:id/gamertag/:platform - Get a profile's handle on a platform.
pub async fn get_gamertag(
    State(state): State<AppState>,
    Path((id, platform)): Path<(String, String)>,
) -> ApiResult<Gamertag> {
    let platform = Platform::from_str(&platform)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown platform {}", platform)))?;

    let profile = state
        .repo
        .get_profile(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

    let gamertag = profile.gamertag(platform).ok_or_else(|| {
        AppError::NotFound(format!(
            "Profile {} has no {} handle",
            id,
            platform.as_str()
        ))
    })?;

    success(Gamertag {
        platform,
        gamertag: gamertag.to_string(),
    })
}

/// PUT /api/profiles/:id - Update a profile.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Profile> {
    if let Some(username) = &request.username {
        if username.trim().is_empty() {
            return Err(AppError::Validation("Username cannot be empty".to_string()));
        }
    }

    let profile = state.repo.update_profile(&id, &request).await?;
    success(profile)
}

/// DELETE /api/profiles/:id - Delete a profile.
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_profile(&id).await?;
    success(())
}
