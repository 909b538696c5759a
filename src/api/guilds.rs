//! Guild API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateGuildRequest, Guild, GuildMembershipRequest};
use crate::AppState;

/// POST /api/guilds - Create a new guild.
pub async fn create_guild(
    State(state): State<AppState>,
    Json(request): Json<CreateGuildRequest>,
) -> ApiResult<Guild> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Guild name is required".to_string()));
    }
    if request.owner_id.trim().is_empty() {
        return Err(AppError::Validation("Owner id is required".to_string()));
    }

    let guild = state.repo.create_guild(&request).await?;
    success(guild)
}

/// GET /api/guilds - List all guilds.
pub async fn list_guilds(State(state): State<AppState>) -> ApiResult<Vec<Guild>> {
    let guilds = state.repo.list_guilds().await?;
    success(guilds)
}

/// GET /api/guilds/:id - Get a single guild.
pub async fn get_guild(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Guild> {
    let guild = state
        .repo
        .get_guild(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", id)))?;

    success(guild)
}

/// POST /api/guilds/:id/join - Add a user to the guild and stamp their profile.
pub async fn join_guild(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<GuildMembershipRequest>,
) -> ApiResult<Guild> {
    let guild = state.repo.join_guild(&id, &request.user_id).await?;
    success(guild)
}

/// POST /api/guilds/:id/leave - Remove a user from the guild and clear their profile stamp.
pub async fn leave_guild(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<GuildMembershipRequest>,
) -> ApiResult<Guild> {
    let guild = state.repo.leave_guild(&id, &request.user_id).await?;
    success(guild)
}
