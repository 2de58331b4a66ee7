use std::sync::Arc;

use axum::{Extension, extract::Query, response::Json};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{ApiError, AppState, checked_limit};

#[derive(Debug, Deserialize)]
pub struct ArtistParams {
    pub name: String,
    pub limit: Option<i64>,
}

/// `GET /artist?name=&limit=` - albums and tracks of an artist, cached.
pub async fn artist(
    Query(params): Query<ArtistParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let name = params.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Artist name cannot be empty.".to_string()));
    }
    let limit = checked_limit(params.limit, 5)?;

    let artist = state.search_artist(name, limit).await;

    Ok(Json(json!({
        "type": "artist",
        "artist": artist.to_plain_mapping(),
    })))
}
