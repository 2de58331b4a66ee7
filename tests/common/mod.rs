#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{Value, json};
use songscout::{
    catalog::{CatalogApi, CatalogClient, CatalogError},
    types::{CatalogResponse, Entity},
};

/// In-memory catalog that counts the requests it receives.
#[derive(Default)]
pub struct FakeCatalog {
    album_results: HashMap<String, Vec<Value>>,
    song_results: HashMap<String, Vec<Value>>,
    lookup_results: HashMap<u64, Vec<Value>>,
    failing_lookups: HashSet<u64>,
    fail_everything: bool,
    delay: Option<Duration>,
    search_calls: AtomicUsize,
    lookup_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose every request fails with a network error.
    pub fn unreachable() -> Self {
        Self {
            fail_everything: true,
            ..Self::default()
        }
    }

    pub fn with_albums(mut self, term: &str, rows: Vec<Value>) -> Self {
        self.album_results.insert(term.to_string(), rows);
        self
    }

    pub fn with_songs(mut self, term: &str, rows: Vec<Value>) -> Self {
        self.song_results.insert(term.to_string(), rows);
        self
    }

    pub fn with_lookup(mut self, id: u64, rows: Vec<Value>) -> Self {
        self.lookup_results.insert(id, rows);
        self
    }

    pub fn with_failing_lookup(mut self, id: u64) -> Self {
        self.failing_lookups.insert(id);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn search(
        &self,
        term: &str,
        entity: Entity,
        limit: u32,
    ) -> Result<CatalogResponse, CatalogError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        if self.fail_everything {
            return Err(CatalogError::Network("connection refused".to_string()));
        }

        let rows = match entity {
            Entity::Album => self.album_results.get(term),
            Entity::Song => self.song_results.get(term),
        };
        let results: Vec<Value> = rows
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .take(limit as usize)
            .collect();

        Ok(CatalogResponse {
            result_count: Some(results.len() as u64),
            results,
        })
    }

    async fn lookup(&self, id: u64, _entity: Entity) -> Result<CatalogResponse, CatalogError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        if self.fail_everything || self.failing_lookups.contains(&id) {
            return Err(CatalogError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        let results = self.lookup_results.get(&id).cloned().unwrap_or_default();
        Ok(CatalogResponse {
            result_count: Some(results.len() as u64),
            results,
        })
    }
}

pub fn client_for(fake: &Arc<FakeCatalog>) -> CatalogClient {
    CatalogClient::new(Arc::clone(fake) as Arc<dyn CatalogApi>, 4)
}

pub fn album_row(id: u64, title: &str, artist: &str) -> Value {
    json!({
        "wrapperType": "collection",
        "collectionType": "Album",
        "collectionId": id,
        "collectionName": title,
        "artistName": artist,
        "artworkUrl100": format!("https://art.example/{}/100x100bb.jpg", id),
    })
}

pub fn track_row(title: &str, number: i64, artist: &str, album: &str) -> Value {
    json!({
        "wrapperType": "track",
        "kind": "song",
        "trackName": title,
        "discNumber": 1,
        "trackNumber": number,
        "trackTimeMillis": 200_000 + number * 1000,
        "previewUrl": format!("https://audio.example/{}.m4a", number),
        "collectionName": album,
        "artistName": artist,
    })
}

/// Lookup answer for an album: the album row followed by its tracks.
pub fn lookup_rows(id: u64, album: &str, artist: &str, titles: &[&str]) -> Vec<Value> {
    let mut rows = vec![album_row(id, album, artist)];
    rows.extend(
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| track_row(t, i as i64 + 1, artist, album)),
    );
    rows
}

/// Two Coldplay albums with three tracks each.
pub fn coldplay_catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_albums(
            "Coldplay",
            vec![
                album_row(1, "Parachutes", "Coldplay"),
                album_row(2, "A Rush of Blood to the Head", "Coldplay"),
            ],
        )
        .with_lookup(
            1,
            lookup_rows(1, "Parachutes", "Coldplay", &["Don't Panic", "Shiver", "Yellow"]),
        )
        .with_lookup(
            2,
            lookup_rows(
                2,
                "A Rush of Blood to the Head",
                "Coldplay",
                &["Politik", "In My Place", "The Scientist"],
            ),
        )
}
