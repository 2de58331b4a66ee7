use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tabled::Tabled;

/// One song as returned by the catalog.
///
/// Built only by the catalog mapping, which guarantees `disc` and `number`
/// are at least 1 whatever the upstream payload says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub name: String,
    pub disc: u32,
    pub number: u32,
    pub time_millis: u64,
    pub preview_url: Option<String>,
    pub album: String,
    pub artist: String,
}

impl Track {
    /// Converts the track into a key-ordered JSON object.
    ///
    /// # Returns
    ///
    /// A `serde_json::Value` object with the keys `album`, `artist`, `disc`,
    /// `name`, `number`, `preview_url` and `time_millis`. A missing preview
    /// URL is `null`.
    pub fn to_plain_mapping(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "disc": self.disc,
            "number": self.number,
            "time_millis": self.time_millis,
            "preview_url": self.preview_url,
            "album": self.album,
            "artist": self.artist,
        })
    }
}

/// One release. The track list is attached after construction by the
/// lookup request and is either unfetched (`None`) or fully replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub id: Option<u64>,
    pub title: String,
    pub image_url: String,
    #[serde(serialize_with = "serialize_tracks")]
    tracks: Option<Vec<Track>>,
}

impl Album {
    /// Creates an album whose tracks have not been fetched yet.
    ///
    /// # Arguments
    ///
    /// * `id` - Catalog collection id; `None` marks an album that can never
    ///   be looked up
    /// * `title` - Album title
    /// * `image_url` - Artwork URL, empty when the catalog has none
    pub fn new(id: Option<u64>, title: String, image_url: String) -> Self {
        Self {
            id,
            title,
            image_url,
            tracks: None,
        }
    }

    /// Tracks of the album, empty while they have not been fetched.
    pub fn tracks(&self) -> &[Track] {
        self.tracks.as_deref().unwrap_or_default()
    }

    /// Whether a track lookup has run for this album, successful or not.
    pub fn tracks_loaded(&self) -> bool {
        self.tracks.is_some()
    }

    /// Replaces the whole track list.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = Some(tracks);
    }

    /// Converts the album and its tracks into a key-ordered JSON object.
    /// Unfetched tracks serialize as an empty list.
    pub fn to_plain_mapping(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "title": self.title,
            "image_url": self.image_url,
            "tracks": self
                .tracks()
                .iter()
                .map(Track::to_plain_mapping)
                .collect::<Vec<_>>(),
        })
    }
}

fn serialize_tracks<S>(tracks: &Option<Vec<Track>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    tracks.as_deref().unwrap_or_default().serialize(serializer)
}

/// A search result group: the resolved artist name and its albums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub name: String,
    pub albums: Vec<Album>,
}

impl Artist {
    pub fn new(name: impl Into<String>, albums: Vec<Album>) -> Self {
        Self {
            name: name.into(),
            albums,
        }
    }

    /// Converts the artist into a key-ordered JSON object, recursing into
    /// albums and tracks.
    ///
    /// # Returns
    ///
    /// `{"albums": [...], "name": "..."}` where every album is rendered by
    /// [`Album::to_plain_mapping`].
    ///
    /// # Example
    ///
    /// ```
    /// let artist = Artist::new("Coldplay", Vec::new());
    /// assert_eq!(artist.to_plain_mapping()["albums"], serde_json::json!([]));
    /// ```
    pub fn to_plain_mapping(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "albums": self
                .albums
                .iter()
                .map(Album::to_plain_mapping)
                .collect::<Vec<_>>(),
        })
    }

    /// Total number of fetched tracks across all albums.
    pub fn track_count(&self) -> usize {
        self.albums.iter().map(|a| a.tracks().len()).sum()
    }
}

/// Raw body of a catalog `search` or `lookup` response.
///
/// Rows are kept as untyped JSON so that a single odd field never rejects
/// the whole response; the mapping functions pick fields out one by one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(rename = "resultCount", default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Result kind requested from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Album,
    Song,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Album => "album",
            Entity::Song => "song",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /favorites` and entry of the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSong {
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Entry of the recently played list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedSong {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub preview_url: Option<String>,
    pub played_at: String,
}

impl PlayedSong {
    /// Records `track` as played now (UTC, RFC 3339).
    pub fn from_track(track: &Track) -> Self {
        Self {
            title: track.name.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            preview_url: track.preview_url.clone(),
            played_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub number: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub length: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub id: String,
    pub title: String,
    pub tracks: usize,
    pub length: String,
}
