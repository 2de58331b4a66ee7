use std::sync::Arc;

use crate::{api::AppState, config, error, management::LookupCache, server};

pub async fn serve() {
    let catalog = match super::catalog_client() {
        Ok(c) => c,
        Err(e) => error!("Cannot create catalog client. Err: {}", e),
    };

    let state = Arc::new(AppState::new(
        catalog,
        LookupCache::new(config::artist_cache_capacity()),
        config::history_max_entries(),
    ));

    tracing::info!(
        "Using catalog at {} (timeout {:?})",
        config::catalog_api_url(),
        config::catalog_timeout()
    );

    if let Err(e) = server::start_api_server(state).await {
        error!("Server stopped. Err: {}", e);
    }
}
