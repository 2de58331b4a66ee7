//! # CLI Module
//!
//! Command implementations behind the `songscout` binary:
//!
//! - [`serve`] - runs the HTTP service
//! - [`artist`] - prints the albums and tracks of an artist
//! - [`songs`] - prints songs matching a title
//!
//! The lookup commands talk to the catalog directly, without the artist
//! cache, and print `tabled` tables. Empty results are reported as warnings;
//! the catalog client has already logged any request failure by then.

mod artist;
mod serve;
mod songs;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

pub use artist::artist;
pub use serve::serve;
pub use songs::songs;

use crate::{
    Res,
    catalog::{CatalogClient, HttpCatalog},
    config,
};

/// Catalog client configured from the environment.
pub fn catalog_client() -> Res<CatalogClient> {
    let api = HttpCatalog::new(config::catalog_api_url(), config::catalog_timeout())?;
    Ok(CatalogClient::new(
        Arc::new(api),
        config::catalog_max_concurrency(),
    ))
}

fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
