pub mod product_routes;
