//! Post API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreatePostRequest, Post};
use crate::AppState;

/// Query parameters for listing posts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub guild_id: String,
}

/// POST /api/posts - Create a new post in a guild's feed.
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<Post> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("Post content is required".to_string()));
    }

    let post = state.repo.create_post(&request).await?;
    success(post)
}

/// GET /api/posts/:id - Get a single post.
pub async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Post> {
    let post = state
        .repo
        .get_post(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    success(post)
}

/// GET /api/posts?guildId= - List a guild's posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsQuery>,
) -> ApiResult<Vec<Post>> {
    let posts = state.repo.list_guild_posts(&params.guild_id).await?;
    success(posts)
}

/// DELETE /api/posts/:id - Delete a post and unlink it from its guild.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_post(&id).await?;
    success(())
}
