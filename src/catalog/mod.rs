//! Game-catalog HTTP accessor.
//!
//! Thin typed wrapper over the third-party catalog REST API. No caching,
//! retry, or rate limiting; a non-2xx response or network failure always
//! surfaces as an error and never as a partially populated record.

use reqwest::Client;

use crate::errors::AppError;
use crate::models::Game;

/// Client for the game-catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Fetch a game record by numeric catalog id.
    pub async fn get_game(&self, id: i64) -> Result<Game, AppError> {
        self.fetch(&id.to_string()).await
    }

    /// Fetch a game record by slug. The catalog serves ids and slugs through
    /// the same path.
    pub async fn get_game_by_slug(&self, slug: &str) -> Result<Game, AppError> {
        self.fetch(slug).await
    }

    async fn fetch(&self, id_or_slug: &str) -> Result<Game, AppError> {
        let url = format!("{}/games/{}", self.base_url, id_or_slug);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Catalog returned {} for game {}",
                response.status(),
                id_or_slug
            )));
        }

        let game = response.json::<Game>().await?;
        Ok(game)
    }
}
