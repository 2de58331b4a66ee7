//! Configuration management for songscout.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every setting has a default, so the
//! service runs without any configuration at all:
//!
//! | Variable | Default |
//! |---|---|
//! | `SERVER_ADDRESS` | `127.0.0.1:8000` |
//! | `CATALOG_API_URL` | `https://itunes.apple.com` |
//! | `CATALOG_TIMEOUT_SECS` | `10` |
//! | `CATALOG_MAX_CONCURRENCY` | `4` |
//! | `HISTORY_MAX_ENTRIES` | `5` |
//! | `ARTIST_CACHE_CAPACITY` | unset (unbounded) |

use dotenv;
use std::{env, path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_CATALOG_API_URL: &str = "https://itunes.apple.com";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CATALOG_MAX_CONCURRENCY: usize = 4;
pub const DEFAULT_HISTORY_MAX_ENTRIES: usize = 5;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under the platform data directory:
/// - Linux: `~/.local/share/songscout/.env`
/// - macOS: `~/Library/Application Support/songscout/.env`
/// - Windows: `%LOCALAPPDATA%/songscout/.env`
///
/// The directory is created when missing. A missing file is not an error;
/// a file that exists but cannot be parsed is. Variables already set in the
/// process environment take precedence over the file.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.exists() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songscout/.env");
    path
}

/// Address the HTTP server binds to, e.g. `127.0.0.1:8000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Base URL of the catalog service, without trailing path.
pub fn catalog_api_url() -> String {
    env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_CATALOG_API_URL.to_string())
}

/// Timeout applied to every single catalog request.
pub fn catalog_timeout() -> Duration {
    Duration::from_secs(parse_or("CATALOG_TIMEOUT_SECS", DEFAULT_CATALOG_TIMEOUT_SECS))
}

/// Number of album track lookups allowed in flight during one artist search.
pub fn catalog_max_concurrency() -> usize {
    parse_or("CATALOG_MAX_CONCURRENCY", DEFAULT_CATALOG_MAX_CONCURRENCY)
}

/// Length of the recently played list.
pub fn history_max_entries() -> usize {
    parse_or("HISTORY_MAX_ENTRIES", DEFAULT_HISTORY_MAX_ENTRIES)
}

/// Maximum number of cached artist lookups; `None` keeps everything.
pub fn artist_cache_capacity() -> Option<usize> {
    env::var("ARTIST_CACHE_CAPACITY")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|c| *c > 0)
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        // SAFETY: the variable name is only used by this test
        unsafe { env::set_var("SONGSCOUT_TEST_PARSE_OR", "not-a-number") };
        assert_eq!(parse_or("SONGSCOUT_TEST_PARSE_OR", 7u64), 7);

        unsafe { env::set_var("SONGSCOUT_TEST_PARSE_OR", " 12 ") };
        assert_eq!(parse_or("SONGSCOUT_TEST_PARSE_OR", 7u64), 12);
    }

    #[test]
    fn test_parse_or_unset() {
        assert_eq!(parse_or("SONGSCOUT_TEST_UNSET_VARIABLE", 3usize), 3);
    }
}
