use std::sync::Arc;

use axum::{Extension, extract::Query, response::Json};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{ApiError, AppState, checked_limit};
use crate::types::{PlayedSong, Track};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub limit: Option<i64>,
}

/// `GET /search?query=&limit=` - songs by title.
///
/// The first hit is treated as played and goes to the front of the recently
/// played list.
pub async fn search(
    Query(params): Query<SearchParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query cannot be empty.".to_string()));
    }
    let limit = checked_limit(params.limit, 10)?;

    let songs = state.catalog.search_songs_by_title(query, limit).await;
    let Some(first) = songs.first() else {
        return Err(ApiError::NotFound(format!(
            "No songs found for '{}'.",
            query
        )));
    };

    let mut history = state.recently_played.lock().await;
    history.push(PlayedSong::from_track(first));
    tracing::debug!(
        "Recently played holds {} of {} songs",
        history.len(),
        history.max_entries()
    );
    drop(history);

    Ok(Json(json!({
        "type": "song",
        "songs": songs.iter().map(Track::to_plain_mapping).collect::<Vec<_>>(),
    })))
}
