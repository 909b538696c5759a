//! Game record as served by the external catalog API.

use serde::{Deserialize, Serialize};

/// A game record sourced verbatim from the catalog.
///
/// Field names follow the catalog's JSON keys (snake_case); the record is
/// immutable from this service's perspective and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}
