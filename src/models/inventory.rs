//! Inventory model matching the mobile client's saved-games list.

use serde::{Deserialize, Serialize};

/// A user's saved-game inventory: an ordered list of catalog game ids.
///
/// The full list is fetched once and paged client-side; ordering is
/// insertion order and is never re-sorted by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub owner_id: String,
    pub game_ids: Vec<i64>,
    pub updated_at: String,
}

/// One page of an inventory read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPage {
    pub game_ids: Vec<i64>,
    /// Cursor for the next page, or -1 when the list is exhausted.
    pub next_cursor: i64,
}
