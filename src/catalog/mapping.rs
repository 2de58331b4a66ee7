//! Row mapping from raw catalog JSON into the entity model.
//!
//! Every field is read on its own and falls back to a fixed default, so a
//! row missing any subset of keys (or carrying the wrong JSON type for one)
//! still produces a complete entity.

use serde_json::Value;

use crate::types::{Album, Track};

pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNIDENTIFIED_TRACK: &str = "Unidentified Track";

/// Maps an album search row. The track list stays unfetched.
pub fn map_album(row: &Value) -> Album {
    Album::new(
        row["collectionId"].as_u64(),
        string_or(row, "collectionName", UNKNOWN_ALBUM),
        string_or(row, "artworkUrl100", ""),
    )
}

/// Maps a song row, clamping disc and track numbers to at least 1 and the
/// duration to at least 0.
pub fn map_track(row: &Value) -> Track {
    tracing::debug!("Mapping track row: {}", row);
    Track {
        name: string_or(row, "trackName", UNIDENTIFIED_TRACK),
        disc: positive_or_one(row, "discNumber"),
        number: positive_or_one(row, "trackNumber"),
        time_millis: row["trackTimeMillis"]
            .as_i64()
            .map(|t| t.max(0) as u64)
            .unwrap_or(0),
        preview_url: row["previewUrl"].as_str().map(str::to_string),
        album: string_or(row, "collectionName", UNKNOWN_ALBUM),
        artist: string_or(row, "artistName", UNKNOWN_ARTIST),
    }
}

/// Reported artist name of a row, if the row carries one.
pub fn artist_name(row: &Value) -> Option<String> {
    row["artistName"].as_str().map(str::to_string)
}

fn string_or(row: &Value, key: &str, default: &str) -> String {
    row[key].as_str().unwrap_or(default).to_string()
}

// disc and track numbers start at 1
fn positive_or_one(row: &Value, key: &str) -> u32 {
    row[key]
        .as_i64()
        .filter(|n| *n >= 1)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(1)
}
