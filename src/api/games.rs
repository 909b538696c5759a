//! Game catalog API endpoints.

use axum::extract::{Path, State};

use super::{success, ApiResult};
use crate::models::Game;
use crate::AppState;

/// GET /api/games/:id - Fetch a game record from the catalog by id.
pub async fn get_game(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Game> {
    let game = state.catalog.get_game(id).await?;
    success(game)
}

/// GET /api/games/slug/:slug - Fetch a game record from the catalog by slug.
pub async fn get_game_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Game> {
    let game = state.catalog.get_game_by_slug(&slug).await?;
    success(game)
}
