//! songscout library
//!
//! A small music discovery backend on top of the iTunes Search API. It looks
//! up artists and songs in the catalog, maps the answers into a stable
//! Artist → Album → Track model, caches expensive artist lookups and serves
//! everything over HTTP together with favorites and a recently played list.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers and shared application state
//! - `catalog` - catalog client, transport and row mapping
//! - `cli` - command-line interface implementations
//! - `config` - configuration management and environment variables
//! - `management` - artist lookup cache, favorites and play history
//! - `server` - router construction and the HTTP server loop
//! - `types` - entity model and wire types
//! - `utils` - formatting and logging helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use songscout::catalog::{CatalogClient, HttpCatalog};
//!
//! #[tokio::main]
//! async fn main() -> songscout::Res<()> {
//!     let api = HttpCatalog::new("https://itunes.apple.com", std::time::Duration::from_secs(10))?;
//!     let client = CatalogClient::new(Arc::new(api), 4);
//!     let artist = client.search_artist("Coldplay", 3).await;
//!     println!("{}", artist.to_plain_mapping());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// Result type used by application code (CLI, server startup).
///
/// Library modules keep their own `thiserror` enums; everything that only
/// needs to be reported to the user is boxed into this alias.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line with a blue `o` marker.
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with status 1.
///
/// Only for fatal CLI errors. Library code logs through `tracing` and
/// never calls this.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `!` line for problems that do not stop the program.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
