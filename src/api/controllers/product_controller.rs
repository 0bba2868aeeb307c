use crate::api::controllers::dto::product_dto::{ProductDomain, ProductListQuery};
use crate::services::errors::ProductServiceError;
use crate::services::product_service::ProductService;
use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Header carrying the total page count for the same filter criteria as the
/// returned listing.
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";

/// List products, filtered and paginated
pub async fn get_products(Query(params): Query<ProductListQuery>) -> impl IntoResponse {
    let service = ProductService::new();

    let products = match service
        .get_products(
            params.page,
            params.size,
            params.sort.as_deref(),
            params.name.as_deref(),
            params.price_min,
            params.price_max,
        )
        .await
    {
        Ok(products) => products,
        Err(ProductServiceError::InvalidSortDirection) => {
            return (StatusCode::BAD_REQUEST, "Invalid sort direction").into_response();
        }
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response(),
    };

    let total_pages = match service
        .get_total_pages(
            params.size,
            params.name.as_deref(),
            params.price_min,
            params.price_max,
        )
        .await
    {
        Ok(total_pages) => total_pages,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response(),
    };

    (
        StatusCode::OK,
        [(TOTAL_PAGES_HEADER, total_pages.to_string())],
        Json(products),
    )
        .into_response()
}

/// Get product by name
pub async fn get_product_by_name(Path(product_name): Path<String>) -> impl IntoResponse {
    let service = ProductService::new();

    match service.get_product(&product_name).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(ProductServiceError::ProductNotFound) => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response(),
    }
}

/// Create a new product; the name must not be taken yet
pub async fn create_product(Json(payload): Json<ProductDomain>) -> impl IntoResponse {
    let service = ProductService::new();

    match service.create_unique_product(&payload).await {
        Ok(_) => (StatusCode::CREATED, "Product created").into_response(),
        Err(ProductServiceError::ProductAlreadyExists) => {
            (StatusCode::CONFLICT, "Product already exists").into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create product",
        )
            .into_response(),
    }
}

/// Update image, description and price of an existing product
pub async fn update_product(
    Path(product_name): Path<String>,
    Json(payload): Json<ProductDomain>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service.update_product(&product_name, &payload).await {
        Ok(_) => (StatusCode::OK, "Product updated").into_response(),
        Err(ProductServiceError::ProductNotFound) => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update product",
        )
            .into_response(),
    }
}

/// Delete a product by name; deleting an absent product is a no-op
pub async fn delete_product(Path(product_name): Path<String>) -> impl IntoResponse {
    let service = ProductService::new();

    match service.delete_product(&product_name).await {
        Ok(_) => (StatusCode::OK, "Product deleted").into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to delete product",
        )
            .into_response(),
    }
}
