use tabled::Table;

use crate::{error, success, utils, warning};

pub async fn artist(name: String, limit: u32, tracks: bool) {
    if name.trim().is_empty() {
        warning!("Nothing to search for.");
        return;
    }

    let client = match super::catalog_client() {
        Ok(c) => c,
        Err(e) => error!("Cannot create catalog client. Err: {}", e),
    };

    let pb = super::spinner(format!("Looking up {}...", name));
    let artist = client.search_artist(&name, limit).await;
    pb.finish_and_clear();

    if artist.albums.is_empty() {
        warning!("No albums found for {}.", name);
        return;
    }

    success!(
        "{}: {} albums, {} tracks",
        artist.name,
        artist.albums.len(),
        artist.track_count()
    );
    println!("{}", Table::new(utils::album_table_rows(&artist)));

    if tracks {
        for album in &artist.albums {
            let mut album_tracks = album.tracks().to_vec();
            utils::sort_by_position(&mut album_tracks);
            println!(
                "\n{title}\n{table}",
                title = album.title,
                table = Table::new(utils::track_table_rows(&album_tracks))
            );
        }
    }
}
