use bigdecimal::BigDecimal;
use catalog_server_lib::api::controllers::dto::product_dto::ProductDomain;
use catalog_server_lib::api::controllers::product_controller::TOTAL_PAGES_HEADER;
use catalog_server_lib::api::routes::product_routes;
use catalog_server_lib::data::database::Database;
use catalog_server_lib::services::product_service::ProductService;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use diesel::result;
use diesel_async::RunQueryDsl;
use http_body_util::BodyExt;
use serde_json::json;
use std::str::FromStr;

use tower::ServiceExt;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use catalog_server_lib::data::models::schema::products::dsl::products;

    diesel::delete(products).execute(&mut conn).await?;

    Ok(())
}

fn app() -> Router {
    Router::new().nest("/api/v1/products", product_routes::routes())
}

async fn create_test_product(name: &str, price: &str) {
    let service = ProductService::new();
    let product = ProductDomain {
        name: name.to_string(),
        image_url: Some("/images/test.jpg".to_string()),
        description: Some("Test Description".to_string()),
        price: BigDecimal::from_str(price).expect("Invalid price literal"),
    };
    service
        .create_unique_product(&product)
        .await
        .expect("Failed to add product");
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_empty_list_of_products() {
    setup().await.expect("Setup failed");

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let products: Vec<ProductDomain> = serde_json::from_slice(&body).unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_3_products() {
    setup().await.expect("Setup failed");
    create_test_product("product_0", "10.00").await;
    create_test_product("product_1", "20.00").await;
    create_test_product("product_2", "30.00").await;

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let products: Vec<ProductDomain> = serde_json::from_slice(&body).unwrap();
    assert_eq!(products.len(), 3);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_three_newest_products() {
    setup().await.expect("Setup failed");
    for i in 0..6 {
        create_test_product(&format!("product_{i}"), "9.99").await;
    }

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products?page=1&size=3&sort=desc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(TOTAL_PAGES_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("2")
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let products: Vec<ProductDomain> = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["product_5", "product_4", "product_3"]);
}

#[tokio::test]
#[serial_test::serial]
async fn test_invalid_sort_direction_is_bad_request() {
    setup().await.expect("Setup failed");

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products?sort=sideways")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial_test::serial]
async fn test_malformed_page_is_rejected_at_the_extractor() {
    setup().await.expect("Setup failed");

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products?page=two")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_one_product() {
    setup().await.expect("Setup failed");
    create_test_product("product_0", "9.99").await;

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products/product_0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let product: ProductDomain = serde_json::from_slice(&body).unwrap();
    assert_eq!(product.name, "product_0");
    assert_eq!(product.image_url.as_deref(), Some("/images/test.jpg"));
    assert_eq!(product.price, BigDecimal::from_str("9.99").unwrap());
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_missing_product_is_not_found() {
    setup().await.expect("Setup failed");

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products/phantom")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_a_product() {
    setup().await.expect("Setup failed");

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "name": "product_0",
                        "imageUrl": "/images/product_0.jpg",
                        "description": "A new product",
                        "price": "15.50"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let service = ProductService::new();
    let product = service.get_product("product_0").await.expect("Fetch failed");
    assert_eq!(product.price, BigDecimal::from_str("15.50").unwrap());
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_duplicate_product_conflicts() {
    setup().await.expect("Setup failed");
    create_test_product("product_0", "9.99").await;

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "name": "product_0",
                        "price": "1.00"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_existing_product() {
    setup().await.expect("Setup failed");
    create_test_product("product_0", "9.99").await;

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/products/product_0")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "name": "product_0",
                        "imageUrl": "/images/test.jpg",
                        "description": "Test Description",
                        "price": "1.00"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let service = ProductService::new();
    let product = service.get_product("product_0").await.expect("Fetch failed");
    assert_eq!(product.price, BigDecimal::from_str("1.00").unwrap());
    assert_eq!(product.price.to_string(), "1.00");
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_missing_product_is_not_found() {
    setup().await.expect("Setup failed");

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/v1/products/phantom")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "name": "phantom",
                        "price": "1.00"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_existing_product() {
    setup().await.expect("Setup failed");
    create_test_product("product_0", "9.99").await;

    let response = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/products/product_0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/products/product_0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_missing_product_is_still_ok() {
    setup().await.expect("Setup failed");

    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/products/phantom")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
