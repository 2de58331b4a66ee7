use crate::types::FavoriteSong;

/// Reasons a favorite cannot be added.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("Song is already in favorites.")]
    AlreadyFavorite,
}

/// Favorite songs in insertion order, unique by title and artist.
#[derive(Debug, Default)]
pub struct FavoritesManager {
    favorites: Vec<FavoriteSong>,
}

impl FavoritesManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `song` unless a favorite with the same title and artist
    /// exists already.
    ///
    /// # Arguments
    ///
    /// * `song` - Favorite to store; its album and preview URL are not
    ///   part of the uniqueness check
    ///
    /// # Returns
    ///
    /// All favorites in insertion order, including the new one.
    ///
    /// # Errors
    ///
    /// [`FavoriteError::AlreadyFavorite`] when `(title, artist)` is taken;
    /// the list is left unchanged.
    pub fn add(&mut self, song: FavoriteSong) -> Result<&[FavoriteSong], FavoriteError> {
        if self.has(&song.title, &song.artist) {
            return Err(FavoriteError::AlreadyFavorite);
        }

        self.favorites.push(song);
        Ok(&self.favorites)
    }

    /// Whether a favorite with exactly this title and artist exists.
    pub fn has(&self, title: &str, artist: &str) -> bool {
        self.favorites
            .iter()
            .any(|f| f.title == title && f.artist == artist)
    }

    pub fn all(&self) -> &[FavoriteSong] {
        &self.favorites
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }
}
