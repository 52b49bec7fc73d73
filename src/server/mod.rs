use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

use crate::model::movie_table::MovieTable;

pub mod handlers;
pub mod render;

pub fn router(table: Arc<MovieTable>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/recommend", post(handlers::recommend))
        .with_state(table)
}

/// Serves until Ctrl-C, then drains in-flight requests.
pub async fn serve(listener: TcpListener, table: Arc<MovieTable>) -> std::io::Result<()> {
    axum::serve(listener, router(table))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            log::error!("Could not listen for Ctrl-C: {:?}", e);
            std::future::pending::<()>().await
        }
    }
}
