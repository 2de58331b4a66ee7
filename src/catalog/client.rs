use std::sync::Arc;

use futures::StreamExt;

use super::{CatalogApi, mapping};
use crate::types::{Album, Artist, Entity, Track};

/// Looks up artists, albums and songs and maps them into the entity model.
///
/// None of the operations fail: a failed request is logged at error level
/// and degrades to an empty result, so "no matches" and "catalog down" look
/// the same to callers.
#[derive(Clone)]
pub struct CatalogClient {
    api: Arc<dyn CatalogApi>,
    max_concurrency: usize,
}

impl CatalogClient {
    /// `max_concurrency` bounds the number of album lookups in flight during
    /// [`CatalogClient::search_artist`]; zero is treated as one.
    pub fn new(api: Arc<dyn CatalogApi>, max_concurrency: usize) -> Self {
        Self {
            api,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Searches albums matching `name` and groups them under one artist.
    ///
    /// # Arguments
    ///
    /// * `name` - Search term, used as is
    /// * `limit` - Maximum number of albums to request
    ///
    /// # Returns
    ///
    /// An [`Artist`] whose albums come back without tracks. When the search
    /// finds albums, the artist is named after the first album's reported
    /// artist (the catalog may correct case or spelling), or
    /// "Unknown Artist" if that row has none. With no albums, or when the
    /// request fails, the artist keeps `name`.
    pub async fn search_artist_albums(&self, name: &str, limit: u32) -> Artist {
        match self.api.search(name, Entity::Album, limit).await {
            Ok(response) => {
                let artist_name = match response.results.first() {
                    Some(first) => mapping::artist_name(first)
                        .unwrap_or_else(|| mapping::UNKNOWN_ARTIST.to_string()),
                    None => name.to_string(),
                };
                let albums: Vec<Album> = response.results.iter().map(mapping::map_album).collect();

                tracing::info!(
                    "Loaded {} albums for {} from catalog",
                    albums.len(),
                    artist_name
                );
                Artist::new(artist_name, albums)
            }
            Err(e) => {
                tracing::error!("Failed to fetch artist '{}': {}", name, e);
                Artist::new(name, Vec::new())
            }
        }
    }

    /// Fetches the tracks of `album` and replaces its track list.
    ///
    /// The first lookup row describes the album itself and is skipped. On
    /// failure the track list is set to empty rather than left unfetched.
    pub async fn fetch_album_tracks(&self, album: &mut Album) {
        let Some(id) = album.id else {
            tracing::warn!(
                "Album '{}' has no catalog id, skipping track lookup",
                album.title
            );
            album.set_tracks(Vec::new());
            return;
        };

        match self.api.lookup(id, Entity::Song).await {
            Ok(response) => {
                let tracks: Vec<Track> = response
                    .results
                    .iter()
                    .skip(1)
                    .map(mapping::map_track)
                    .collect();

                tracing::info!(
                    "Loaded {} tracks for album '{}' from catalog",
                    tracks.len(),
                    album.title
                );
                album.set_tracks(tracks);
            }
            Err(e) => {
                tracing::error!("Failed to fetch tracks for album '{}': {}", album.title, e);
                album.set_tracks(Vec::new());
            }
        }
    }

    /// Searches songs by title.
    pub async fn search_songs_by_title(&self, title: &str, limit: u32) -> Vec<Track> {
        match self.api.search(title, Entity::Song, limit).await {
            Ok(response) => {
                tracing::info!(
                    "Loaded {} songs for title '{}' from catalog",
                    response.results.len(),
                    title
                );
                response.results.iter().map(mapping::map_track).collect()
            }
            Err(e) => {
                tracing::error!("Failed to fetch songs for title '{}': {}", title, e);
                Vec::new()
            }
        }
    }

    /// Album search followed by a track lookup for every album found.
    ///
    /// Track lookups run concurrently, each one writing only its own album.
    pub async fn search_artist(&self, name: &str, limit: u32) -> Artist {
        let mut artist = self.search_artist_albums(name, limit).await;

        let client = self;
        futures::stream::iter(artist.albums.iter_mut())
            .for_each_concurrent(self.max_concurrency, move |album| {
                client.fetch_album_tracks(album)
            })
            .await;

        artist
    }
}
