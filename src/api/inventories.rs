//! Inventory API endpoints.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::models::{Inventory, InventoryPage};
use crate::pagination::Paginator;
use crate::AppState;

/// Query parameters for paged inventory reads.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Cursor from the previous page; 0 for the first page, -1 means done.
    #[serde(default)]
    pub cursor: i64,
}

/// GET /api/inventories/:owner - Get a user's full inventory.
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Inventory> {
    let inventory = state.repo.get_or_create_inventory(&owner_id).await?;
    success(inventory)
}

/// GET /api/inventories/:owner/page?cursor= - Read the next page of saved game ids.
pub async fn get_inventory_page(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    Query(params): Query<PageQuery>,
) -> ApiResult<InventoryPage> {
    let inventory = state.repo.get_or_create_inventory(&owner_id).await?;

    let mut pager = Paginator::new(inventory.game_ids, params.cursor);
    pager.load_more();

    success(InventoryPage {
        game_ids: pager.visible().to_vec(),
        next_cursor: pager.next_cursor(),
    })
}

/// POST /api/inventories/:owner/games/:game_id - Save a game to the inventory.
pub async fn add_game(
    State(state): State<AppState>,
    Path((owner_id, game_id)): Path<(String, i64)>,
) -> ApiResult<Inventory> {
    let inventory = state.repo.add_inventory_game(&owner_id, game_id).await?;
    success(inventory)
}

/// DELETE /api/inventories/:owner/games/:game_id - Remove a game from the inventory.
pub async fn remove_game(
    State(state): State<AppState>,
    Path((owner_id, game_id)): Path<(String, i64)>,
) -> ApiResult<Inventory> {
    let inventory = state.repo.remove_inventory_game(&owner_id, game_id).await?;
    success(inventory)
}
