use tabled::Table;

use crate::{error, success, utils, warning};

pub async fn songs(title: String, limit: u32) {
    if title.trim().is_empty() {
        warning!("Nothing to search for.");
        return;
    }

    let client = match super::catalog_client() {
        Ok(c) => c,
        Err(e) => error!("Cannot create catalog client. Err: {}", e),
    };

    let pb = super::spinner(format!("Searching songs for '{}'...", title));
    let tracks = client.search_songs_by_title(&title, limit).await;
    pb.finish_and_clear();

    if tracks.is_empty() {
        warning!("No songs found for '{}'.", title);
        return;
    }

    success!("Found {} songs", tracks.len());
    println!("{}", Table::new(utils::track_table_rows(&tracks)));
}
