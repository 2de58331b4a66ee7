mod cache;
mod favorites;
mod history;

pub use cache::LookupCache;
pub use favorites::FavoriteError;
pub use favorites::FavoritesManager;
pub use history::BoundedHistory;
