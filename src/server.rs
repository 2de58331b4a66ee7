use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, api::AppState, config, info};

/// Builds the router with every route of the service.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/search", get(api::search))
        .route("/artist", get(api::artist))
        .route(
            "/favorites",
            get(api::list_favorites).post(api::add_favorite),
        )
        .route("/recently-played", get(api::recently_played))
        .layer(Extension(state))
}

/// Binds to `SERVER_ADDRESS` and serves until the process is stopped.
pub async fn start_api_server(state: Arc<AppState>) -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
