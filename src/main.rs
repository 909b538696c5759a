//! GameSaved Backend
//!
//! REST backend for the GameSaved game-tracking application: profiles, guilds,
//! parties, posts, per-user game inventories, and a proxied game-catalog accessor,
//! with SQLite persistence.

mod api;
mod auth;
mod catalog;
mod config;
mod db;
mod errors;
mod masks;
mod models;
mod pagination;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog::CatalogClient;
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub catalog: Arc<CatalogClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GameSaved Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Catalog URL: {}", config.catalog_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (GAMESAVED_API_PSK). Authentication is disabled!");
    }

    // Warn if the catalog key is not configured
    if config.catalog_key.is_none() {
        tracing::warn!("No catalog key configured (GAMESAVED_CATALOG_KEY). Catalog requests may be rejected!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Initialize catalog client
    let catalog = Arc::new(CatalogClient::new(
        config.catalog_url.clone(),
        config.catalog_key.clone(),
    ));

    // Create application state
    let state = AppState {
        repo,
        catalog,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // Profiles
        .route("/profiles", post(api::create_profile))
        .route("/profiles/{id}", get(api::get_profile))
        .route(
            "/profiles/{id}/gamertag/{platform}",
            get(api::get_gamertag),
        )
        .route("/profiles/{id}", put(api::update_profile))
        .route("/profiles/{id}", delete(api::delete_profile))
        // Guilds
        .route("/guilds", post(api::create_guild))
        .route("/guilds", get(api::list_guilds))
        .route("/guilds/{id}", get(api::get_guild))
        .route("/guilds/{id}/join", post(api::join_guild))
        .route("/guilds/{id}/leave", post(api::leave_guild))
        // Parties
        .route("/parties/{owner}", get(api::get_party))
        .route(
            "/parties/{owner}/members/{user}/toggle",
            post(api::toggle_party_member),
        )
        // Posts
        .route("/posts", post(api::create_post))
        .route("/posts", get(api::list_posts))
        .route("/posts/{id}", get(api::get_post))
        .route("/posts/{id}", delete(api::delete_post))
        // Inventories
        .route("/inventories/{owner}", get(api::get_inventory))
        .route("/inventories/{owner}/page", get(api::get_inventory_page))
        .route(
            "/inventories/{owner}/games/{game_id}",
            post(api::add_game),
        )
        .route(
            "/inventories/{owner}/games/{game_id}",
            delete(api::remove_game),
        )
        // Game catalog
        .route("/games/{id}", get(api::get_game))
        .route("/games/slug/{slug}", get(api::get_game_by_slug))
        // Search
        .route("/search/profiles", get(api::search_profiles))
        .route("/search/guilds", get(api::search_guilds))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
