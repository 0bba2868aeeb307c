use crate::api::config::Config;
use crate::api::routes::product_routes;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub async fn start() {
    let config = Config::new();

    let cors_layer = CorsLayer::new().allow_origin(Any);
    let router = Router::new()
        .route("/", get(|| async { "index" }))
        .nest("/api/v1/products", product_routes::routes())
        .layer(cors_layer);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{}", config.bind_address);

    axum::serve(listener, router)
        .await
        .expect("Failed to start the server");
}
