use std::path::Path;

use axum::Router;
use color_eyre::eyre::{self, WrapErr};
use console::style;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::AppConfig;

/// Static files only: the page, its wasm bundle and the data file.
pub fn router(site_dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(site_dir))
}

pub async fn run(config: &AppConfig) -> eyre::Result<()> {
    let listener = TcpListener::bind(config.bind_address)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", config.bind_address))?;

    println!(
        "Starting server at {}",
        style(format!("http://{}", config.bind_address))
            .bold()
            .bright()
            .blue()
    );

    axum::serve(listener, router(&config.site_dir))
        .await
        .wrap_err("Failed to start server")
}
