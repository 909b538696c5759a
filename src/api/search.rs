//! Prefix-search API endpoints.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::models::{Guild, Profile};
use crate::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Name prefix to match.
    pub q: String,
}

/// GET /api/search/profiles - Search profiles by username prefix.
pub async fn search_profiles(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Vec<Profile>> {
    if params.q.trim().is_empty() {
        return success(Vec::new());
    }

    let profiles = state.repo.search_profiles(params.q.trim()).await?;
    success(profiles)
}

/// GET /api/search/guilds - Search guilds by name prefix.
pub async fn search_guilds(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Vec<Guild>> {
    if params.q.trim().is_empty() {
        return success(Vec::new());
    }

    let guilds = state.repo.search_guilds(params.q.trim()).await?;
    success(guilds)
}
