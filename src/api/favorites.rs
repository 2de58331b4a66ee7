use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use super::{ApiError, AppState};
use crate::types::FavoriteSong;

/// `POST /favorites` - stores a song as favorite.
///
/// # Request Body
///
/// `{"title", "artist", "album", "preview_url"?}`
///
/// # Returns
///
/// `{"message": "Song added to favorites", "favorites": [...]}` with the
/// full list.
///
/// # Errors
///
/// 400 `Song is already in favorites.` when the title and artist pair is
/// stored already.
pub async fn add_favorite(
    Extension(state): Extension<Arc<AppState>>,
    Json(song): Json<FavoriteSong>,
) -> Result<Json<Value>, ApiError> {
    let mut favorites = state.favorites.lock().await;
    let title = song.title.clone();
    let all = favorites.add(song)?;
    tracing::info!("Added '{}' to favorites ({} total)", title, all.len());

    Ok(Json(json!({
        "message": "Song added to favorites",
        "favorites": all,
    })))
}

/// `GET /favorites` - favorites in insertion order.
pub async fn list_favorites(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let favorites = state.favorites.lock().await;
    tracing::debug!("Listing {} favorites", favorites.count());
    Json(json!({ "favorites": favorites.all() }))
}

/// `GET /recently-played` - songs recorded by `/search`, newest first.
pub async fn recently_played(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let history = state.recently_played.lock().await;
    Json(json!({ "recently_played": history.entries() }))
}
