use tracing_subscriber::EnvFilter;

use crate::types::{AlbumTableRow, Artist, Track, TrackTableRow};

/// Installs the global `tracing` subscriber.
///
/// Honors `RUST_LOG`; without it only songscout's own info-level events are
/// shown.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Formats a duration in milliseconds as `m:ss`, or `h:mm:ss` from one hour on.
pub fn format_duration(millis: u64) -> String {
    let total_secs = millis / 1000;
    let (hours, mins, secs) = (total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

pub fn track_table_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            number: format!("{}-{:02}", t.disc, t.number),
            name: t.name.clone(),
            artist: t.artist.clone(),
            album: t.album.clone(),
            length: format_duration(t.time_millis),
        })
        .collect()
}

pub fn album_table_rows(artist: &Artist) -> Vec<AlbumTableRow> {
    artist
        .albums
        .iter()
        .map(|a| AlbumTableRow {
            id: a.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            title: a.title.clone(),
            tracks: a.tracks().len(),
            length: format_duration(a.tracks().iter().map(|t| t.time_millis).sum()),
        })
        .collect()
}

/// Sorts tracks by disc, then track number. Stable for equal positions.
pub fn sort_by_position(tracks: &mut [Track]) {
    tracks.sort_by_key(|t| (t.disc, t.number));
}
