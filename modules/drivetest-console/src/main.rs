use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use drivetest_client::BackendClient;
use drivetest_common::Config;

mod components;
mod pages;
mod templates;
mod upload;

/// Drive-test ZIP bundles routinely exceed axum's 2 MB default body limit.
const MAX_UPLOAD_BYTES: usize = 250 * 1024 * 1024;

pub struct AppState {
    pub backend: BackendClient,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("drivetest=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        backend: BackendClient::new(&config.backend_url),
    });

    let app = Router::new()
        // Listing pages
        .route("/", get(pages::test_results_page))
        .route("/sites", get(pages::sites_page))
        .route("/criteria", get(pages::criteria_page))
        // Uploads
        .route("/process_zip", post(pages::upload_zip))
        .route("/sites/upload", post(pages::upload_sites))
        .route("/criteria/upload", post(pages::upload_criteria))
        // Test results
        .route("/test_results/{filename}", get(pages::test_result_detail_page))
        .route("/test_results/{filename}/delete", post(pages::delete_test_result))
        .route("/plot/{filename}", get(pages::plot_page))
        // Sites
        .route("/sites/{key}/edit", get(pages::edit_site_page))
        .route("/sites/{key}", post(pages::update_site))
        .route("/sites/{key}/delete", post(pages::delete_site))
        // Criteria
        .route("/criteria/{id}/edit", get(pages::edit_criteria_page))
        .route("/criteria/{id}", post(pages::update_criteria))
        .route("/criteria/{id}/delete", post(pages::delete_criteria))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Drive-test console starting on {addr}");
    info!("Backend at {}", config.backend_url);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
