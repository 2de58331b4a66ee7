//! # API Module
//!
//! HTTP endpoints of songscout, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, a small static page
//! - [`health`] - `GET /health`, status and version
//! - [`search`] - `GET /search?query=&limit=`, songs by title
//! - [`artist`] - `GET /artist?name=&limit=`, albums and tracks of an artist
//! - [`add_favorite`] / [`list_favorites`] - `POST` / `GET /favorites`
//! - [`recently_played`] - `GET /recently-played`
//!
//! Handlers share one [`AppState`] through an `Extension`. Failures are
//! answered with [`ApiError`], rendered as `{"detail": "..."}`.
//!
//! Catalog lookups never fail here: an unreachable catalog and a query
//! without matches both yield empty results, which `/search` reports as 404.

mod artist;
mod error;
mod favorites;
mod health;
mod index;
mod search;

use std::sync::Arc;

use tokio::sync::Mutex;

pub use artist::artist;
pub use error::ApiError;
pub use favorites::{add_favorite, list_favorites, recently_played};
pub use health::health;
pub use index::index;
pub use search::search;

use crate::{
    catalog::CatalogClient,
    management::{BoundedHistory, FavoritesManager, LookupCache},
    types::{Artist, PlayedSong},
};

/// Largest page size the catalog accepts.
pub const MAX_LIMIT: u32 = 200;

/// State shared by all handlers.
pub struct AppState {
    pub catalog: CatalogClient,
    pub artist_cache: LookupCache,
    pub favorites: Mutex<FavoritesManager>,
    pub recently_played: Mutex<BoundedHistory<PlayedSong>>,
}

impl AppState {
    /// # Arguments
    ///
    /// * `catalog` - Client used for every catalog request
    /// * `artist_cache` - Cache behind [`AppState::search_artist`]
    /// * `history_max_entries` - Bound of the recently played list
    pub fn new(
        catalog: CatalogClient,
        artist_cache: LookupCache,
        history_max_entries: usize,
    ) -> Self {
        Self {
            catalog,
            artist_cache,
            favorites: Mutex::new(FavoritesManager::new()),
            recently_played: Mutex::new(BoundedHistory::new(history_max_entries)),
        }
    }

    /// Composite artist lookup through the artist cache.
    ///
    /// A repeated `(name, limit)` pair is answered from the cache without
    /// touching the catalog; concurrent identical calls share one lookup.
    pub async fn search_artist(&self, name: &str, limit: u32) -> Arc<Artist> {
        self.artist_cache
            .get_or_compute(name, limit, || self.catalog.search_artist(name, limit))
            .await
    }
}

/// Validates a `limit` query parameter, capped at [`MAX_LIMIT`].
pub(crate) fn checked_limit(limit: Option<i64>, default: u32) -> Result<u32, ApiError> {
    match limit {
        None => Ok(default),
        Some(l) if l <= 0 => Err(ApiError::BadRequest(
            "Limit must be a positive number.".to_string(),
        )),
        Some(l) => Ok(u32::try_from(l).unwrap_or(MAX_LIMIT).min(MAX_LIMIT)),
    }
}
