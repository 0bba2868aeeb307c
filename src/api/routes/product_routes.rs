use crate::api::controllers::product_controller;
use axum::Router;
use axum::routing::{delete, get, put};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(product_controller::get_products))
        .route("/", put(product_controller::create_product))
        .route("/{name}", get(product_controller::get_product_by_name))
        .route("/{name}", put(product_controller::update_product))
        .route("/{name}", delete(product_controller::delete_product))
}
