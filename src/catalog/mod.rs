//! # Catalog Integration Module
//!
//! Client for the iTunes Search API, the catalog every lookup in songscout
//! goes to. The module is split along the same line as the data flow:
//!
//! ```text
//! Route layer / CLI
//!          ↓
//! CatalogClient        (composite lookups, graceful degradation)
//!          ↓
//! mapping              (raw JSON rows → Track / Album)
//!          ↓
//! CatalogApi           (transport seam: HttpCatalog, test fakes)
//!          ↓
//! iTunes Search API
//! ```
//!
//! ## Endpoints
//!
//! - `GET /search?term=&entity={album|song}&limit=`
//! - `GET /lookup?id=&entity=song`, whose first row is the album itself
//!
//! ## Error Handling
//!
//! The transport returns a tagged [`CatalogError`] for every failure (network,
//! timeout, non-2xx status, malformed JSON). [`CatalogClient`] branches on it,
//! logs at error level and hands back empty results. Catalog lookups are
//! enrichment, they never fail a request.

mod client;
mod error;
mod http;
pub mod mapping;

use async_trait::async_trait;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use http::HttpCatalog;

use crate::types::{CatalogResponse, Entity};

/// Raw access to the catalog's `search` and `lookup` endpoints.
///
/// Implemented by [`HttpCatalog`]; tests plug in in-memory implementations.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Runs a catalog search.
    ///
    /// # Arguments
    ///
    /// * `term` - Free text search term
    /// * `entity` - Kind of rows wanted, albums or songs
    /// * `limit` - Maximum number of rows
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`]; an empty result set is not an error.
    async fn search(
        &self,
        term: &str,
        entity: Entity,
        limit: u32,
    ) -> Result<CatalogResponse, CatalogError>;

    /// Looks up a collection by id. The first row describes the collection
    /// itself, the remaining rows its `entity` children.
    async fn lookup(&self, id: u64, entity: Entity) -> Result<CatalogResponse, CatalogError>;
}
